//! CLI module for rapport
//!
//! Commands:
//! - serve: start the REST server
//! - run: execute a definition file offline and print CSV
//! - sources: list data sources and their catalog fields

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
