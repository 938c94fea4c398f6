//! Service configuration
//!
//! Loaded from a JSON file; every field has a default, so a missing file is
//! equivalent to the default configuration. The data file location lives
//! here and is handed to the store at construction — no process-wide state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration failures are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    /// Config file is not valid JSON
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but holds an unusable value
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Record collection file (default: "data.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// CORS allowed origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data.json")
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing file yields the default configuration; a malformed file
    /// is an error.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.host.is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "data_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address string for binding.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
