//! Error types for the parser

use thiserror::Error;

/// Errors that can occur while turning a query into a structured result
///
/// These stay internal to a `run` call; the public surface folds them into
/// a value-level `processing_error` record.
#[derive(Error, Debug)]
pub enum ParserError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// The recovered text was not parseable JSON
    #[error("Invalid JSON output: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for ParserError {
    fn from(e: serde_json::Error) -> Self {
        ParserError::InvalidJson(e.to_string())
    }
}
