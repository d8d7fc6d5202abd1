//! Export error types

use thiserror::Error;

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Export errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The sink failed to render the table
    #[error("export rendering failed: {0}")]
    Render(String),
}
