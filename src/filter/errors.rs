//! Filter validation errors

use thiserror::Error;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Rejections produced while validating filter criteria.
///
/// All of these are deterministic bad-request outcomes; none are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Integer criterion with a non-integer value
    #[error("{0} must be an integer")]
    NotAnInteger(&'static str),

    /// Integer criterion with a negative value
    #[error("{0} must be non-negative")]
    Negative(&'static str),

    /// contains_character with anything but exactly one character
    #[error("contains_character must be a single character")]
    NotASingleCharacter,
}
