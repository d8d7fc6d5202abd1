//! Catalog error types

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
///
/// The source set is closed, so `UnknownDataSource` is defensive: it can only
/// arise at the REST/CLI boundary where sources arrive as strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Source tag outside the closed set
    #[error("unknown data source: {0}")]
    UnknownDataSource(String),
}
