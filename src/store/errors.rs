//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while persisting the record collection.
///
/// Read failures are deliberately absent: an absent, unreadable, or corrupt
/// data file loads as an empty collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure while writing the collection
    #[error("Failed to persist record collection: {0}")]
    Io(#[from] std::io::Error),

    /// Collection could not be encoded as JSON
    #[error("Failed to encode record collection: {0}")]
    Encode(#[from] serde_json::Error),
}
