//! In-memory record source
//!
//! Backs collections with fixed record vectors. Collections not seeded are
//! unavailable, which makes outage paths easy to exercise in tests.

use std::collections::HashMap;

use serde_json::Value;

use crate::catalog::DataSource;

use super::errors::{SourceError, SourceResult};
use super::RecordSource;

/// Record source backed by per-collection vectors
#[derive(Debug, Default)]
pub struct MemoryRecordSource {
    collections: HashMap<DataSource, Vec<Value>>,
}

impl MemoryRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a collection with records, replacing any previous seed
    pub fn seed(mut self, source: DataSource, records: Vec<Value>) -> Self {
        self.collections.insert(source, records);
        self
    }
}

impl RecordSource for MemoryRecordSource {
    fn fetch_all(&self, source: DataSource) -> SourceResult<Vec<Value>> {
        self.collections
            .get(&source)
            .cloned()
            .ok_or_else(|| SourceError::unavailable(source, "collection not seeded"))
    }
}
