//! CLI-specific error types
//!
//! All CLI errors are fatal: main prints them and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or written
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// init refused to overwrite an existing config file
    #[error("Config file already exists: {}", .0.display())]
    AlreadyInitialized(PathBuf),

    /// Filesystem failure outside the store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record collection could not be written
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Server failed to boot or crashed
    #[error("Failed to start server: {0}")]
    Boot(String),
}
