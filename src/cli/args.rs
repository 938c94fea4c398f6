//! CLI argument definitions using clap
//!
//! Commands:
//! - strand init --config <path>
//! - strand start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// strand - a small, self-hostable string analysis and record service
#[derive(Parser, Debug)]
#[command(name = "strand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration and an empty record collection
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./strand.json")]
        config: PathBuf,
    },

    /// Start the strand server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./strand.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
