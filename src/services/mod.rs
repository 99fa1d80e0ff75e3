pub mod answer_resolver;
pub mod container_discovery;
pub mod passage_classifier;
pub mod question_classifier;
pub mod selectors;
pub mod text;
pub mod title_resolver;
pub mod warn_writer;

pub use answer_resolver::AnswerResolver;
pub use container_discovery::discover_containers;
pub use passage_classifier::PassageClassifier;
pub use question_classifier::QuestionClassifier;
pub use selectors::Selectors;
pub use title_resolver::TitleResolver;
pub use warn_writer::WarnWriter;
