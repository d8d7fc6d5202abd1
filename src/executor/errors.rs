//! Executor error types
//!
//! The pipeline itself cannot fail: filtering, projection, and sorting are
//! total. Failures come from the collaborators it resolves: the definition
//! store, the record source, and the export sink.

use thiserror::Error;

use crate::definition::StoreError;
use crate::export::ExportError;
use crate::source::SourceError;

/// Result type for execution operations
pub type ExecuteResult<T> = Result<T, ExecuteError>;

/// Execution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    /// The record source could not be queried
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Definition lookup or stamping failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The export sink failed to render
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DataSource;

    #[test]
    fn test_source_error_passes_through() {
        let err: ExecuteError = SourceError::unavailable(DataSource::Employees, "down").into();
        assert_eq!(
            err.to_string(),
            "data source 'employees' is unavailable: down"
        );
    }
}
