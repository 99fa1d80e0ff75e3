pub mod category;
pub mod loaders;
pub mod question;
pub mod rules;

pub use category::Category;
pub use loaders::{load_html_file, load_json_records, load_rules};
pub use question::{DataWarning, QuestionRecord, QuestionType};
pub use rules::{MarkupProfile, RuleSet};
