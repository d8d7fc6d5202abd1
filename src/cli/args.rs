//! CLI argument definitions using clap
//!
//! Commands:
//! - rapport serve --config <path>
//! - rapport run --config <path> --definition <path>
//! - rapport sources

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rapport - A strict, deterministic report definition and execution engine
#[derive(Parser, Debug)]
#[command(name = "rapport")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the rapport REST server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./rapport.json")]
        config: PathBuf,
    },

    /// Execute a report definition file and print CSV to stdout
    Run {
        /// Path to configuration file
        #[arg(long, default_value = "./rapport.json")]
        config: PathBuf,

        /// Path to a report definition JSON file
        #[arg(long)]
        definition: PathBuf,
    },

    /// List data sources and their selectable fields
    Sources,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
