use serde::{Deserialize, Serialize};

/// The document side of a query: the home page sends a single URL, the
/// answer-fetcher page sends one or more pasted texts.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Documents {
    Single(String),
    Many(Vec<String>),
}

#[derive(Debug, Serialize)]
pub struct RunRequest {
    pub documents: Documents,
    pub questions: Vec<String>,
}

/// One normalized question/answer pair, derived from the raw payload for
/// display and never sent back upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
