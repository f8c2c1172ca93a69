//! CLI module for robodb
//!
//! Provides command-line interface for:
//! - serve: Load config and seed data, then serve HTTP
//! - check-seed: One-shot validation of a seed file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{boot_store, check_seed, run, run_command, serve, Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
