pub mod file_loader;
pub mod rules_loader;

pub use file_loader::{load_html_file, load_json_records};
pub use rules_loader::load_rules;
