//! CLI command implementations
//!
//! `init` materializes the default configuration and an empty collection;
//! `start` loads the configuration, boots the store and server, and blocks
//! on the runtime until shutdown.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServiceConfig};
use crate::rest_api::ApiServer;
use crate::store::{JsonFileStore, RecordStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the requested command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write the default configuration and an empty record collection.
fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(config_path.to_path_buf()));
    }

    let config = ServiceConfig::default();
    let encoded = serde_json::to_string_pretty(&config).map_err(ConfigError::from)?;
    fs::write(config_path, encoded)?;

    let store = JsonFileStore::new(&config.data_file);
    store.save_all(&[])?;

    println!(
        "Initialized strand at {} (data file: {})",
        config_path.display(),
        config.data_file.display()
    );
    Ok(())
}

/// Load configuration, boot the store, and serve until shutdown.
fn start(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    init_tracing();

    let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(&config.data_file));
    let server = ApiServer::new(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Boot(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Install the global tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("strand=info,tower_http=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
