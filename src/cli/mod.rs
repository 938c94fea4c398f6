//! Command-line interface
//!
//! Thin dispatch layer: parse arguments, run the requested command, and
//! surface fatal errors for main to print.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
