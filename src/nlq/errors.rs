//! Translator error types

use thiserror::Error;

/// Result type for query translation
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Failures while interpreting a free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// No rule matched anything in the query
    #[error("Unable to parse natural language query")]
    Unparseable,

    /// A rule matched but its capture could not be interpreted
    #[error("Unable to parse natural language query: {detail}")]
    Malformed { detail: String },

    /// The parsed criteria contradict each other
    #[error("Query parsed but resulted in conflicting filters: min_length {min} exceeds max_length {max}")]
    Conflicting { min: usize, max: usize },
}
