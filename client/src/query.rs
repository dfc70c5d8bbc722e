use regex::Regex;
use serde_json::Value;

/// Splits the questions textarea into an ordered list, one question per
/// non-empty line.
pub fn parse_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Splits the documents textarea into individual documents.
///
/// The input is either a JSON array, a single JSON value, or free text with
/// documents separated by a line of three or more dashes.
pub fn parse_documents(text: &str) -> Vec<String> {
    if let Ok(parsed) = serde_json::from_str::<Value>(text) {
        return match parsed {
            Value::Array(items) => items.into_iter().map(value_to_text).collect(),
            other => vec![value_to_text(other)],
        };
    }

    let delimiter = Regex::new(r"(?m)^\s*-{3,}\s*$").unwrap();
    let parts: Vec<String> = delimiter
        .split(text)
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() && !text.trim().is_empty() {
        return vec![text.to_string()];
    }
    parts
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
