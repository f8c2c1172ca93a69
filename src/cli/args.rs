//! CLI argument definitions using clap
//!
//! Commands:
//! - robodb serve [--config <path>] [--port <port>] [--seed <path>]
//! - robodb check-seed --seed <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// robodb - An in-memory robot registry
#[derive(Parser, Debug)]
#[command(name = "robodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load seed data and serve the HTTP API
    Serve {
        /// Path to configuration file (default: ./robodb.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override
        #[arg(long)]
        port: Option<u16>,

        /// Seed file override
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Validate a seed file against the default catalog and exit
    CheckSeed {
        /// Path to seed file
        #[arg(long)]
        seed: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
