//! Record source error types

use thiserror::Error;

use crate::catalog::DataSource;

/// Result type for record source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Record source errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The collection could not be reached or read
    #[error("data source '{source}' is unavailable: {reason}")]
    Unavailable { source: DataSource, reason: String },
}

impl SourceError {
    /// Creates an unavailable error for the given collection
    pub fn unavailable(source: DataSource, reason: impl Into<String>) -> Self {
        SourceError::Unavailable {
            source,
            reason: reason.into(),
        }
    }
}
