//! CLI command implementations
//!
//! `serve` wires the file-backed store and record source into the REST
//! server. `run` executes a definition file against the same data directory
//! without touching the store.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;

use crate::catalog::{self, DataSource};
use crate::config::RapportConfig;
use crate::definition::{validate_draft, FileDefinitionStore, ReportDefinition, ReportDraft};
use crate::executor::ExecutionService;
use crate::export::CsvExporter;
use crate::rest_api::RestServer;
use crate::source::FileRecordSource;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config } => serve(&config),
        Command::Run { config, definition } => run_definition(&config, &definition),
        Command::Sources => sources(),
    }
}

fn load_config(path: &Path) -> CliResult<RapportConfig> {
    RapportConfig::load(path).map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
}

/// Start the REST server over the configured data directory
fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;

    let records = FileRecordSource::new(&config.data_dir);
    let store = FileDefinitionStore::open(&config.data_dir)?;
    let service = ExecutionService::new(Arc::new(records), Arc::new(store));
    let server = RestServer::new(config, service);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Execute a definition file offline and print CSV to stdout.
///
/// The definition is validated but never saved; `last_run_at` stays
/// untouched even when the file names a stored report.
fn run_definition(config_path: &Path, definition_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;

    let content = fs::read_to_string(definition_path)
        .map_err(|e| CliError::Definition(format!("{}: {}", definition_path.display(), e)))?;
    let draft: ReportDraft = serde_json::from_str(&content)
        .map_err(|e| CliError::Definition(format!("{}: {}", definition_path.display(), e)))?;
    validate_draft(&draft)?;

    let definition = ReportDefinition::from_draft(draft, Utc::now());

    let records = FileRecordSource::new(&config.data_dir);
    let store = FileDefinitionStore::open(&config.data_dir)?;
    let service = ExecutionService::new(Arc::new(records), Arc::new(store));

    let document = service.export(&definition, &CsvExporter::new())?;
    io::stdout().write_all(&document)?;
    Ok(())
}

/// Print every data source and its selectable fields
fn sources() -> CliResult<()> {
    let mut out = io::stdout();
    for source in DataSource::ALL {
        writeln!(out, "{}", source)?;
        for field in catalog::fields_for(source) {
            writeln!(out, "  {}  ({})", field.id, field.label)?;
        }
    }
    Ok(())
}
