//! Result types for report execution

use serde::Serialize;

use super::projection::Row;

/// Result of one report execution.
///
/// Transient: produced per invocation, never persisted. `total_count` is the
/// size of the full filtered set even when `rows` was truncated by a preview
/// limit, so "no rows matched" and "rows were cut off" stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportResult {
    /// Ordered result rows
    pub rows: Vec<Row>,
    /// Full filtered set size, before any limit
    pub total_count: usize,
}

impl ReportResult {
    /// Creates an empty result
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
        }
    }

    /// Returns the number of returned rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows were returned
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if a limit cut the row set short
    pub fn truncated(&self) -> bool {
        self.rows.len() < self.total_count
    }
}
