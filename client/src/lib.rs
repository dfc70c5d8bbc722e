pub mod answers_service;
pub mod config;
pub mod formatter;
pub mod models;
pub mod normalizer;
pub mod query;

pub use answers_service::AnswersClient;
pub use config::ApiConfig;
pub use formatter::{escape_html, render_html};
pub use models::*;
pub use normalizer::normalize;
pub use query::{parse_documents, parse_questions};
