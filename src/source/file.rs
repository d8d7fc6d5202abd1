//! File-backed record source
//!
//! Each collection is one JSON array at `<data_dir>/<source>.json`, read in
//! full on every fetch. Reports are executed against whatever is on disk at
//! that moment; nothing is cached between invocations.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::catalog::DataSource;

use super::errors::{SourceError, SourceResult};
use super::RecordSource;

/// Record source reading one JSON array file per collection
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    data_dir: PathBuf,
}

impl FileRecordSource {
    /// Creates a source rooted at the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the file path backing a collection
    pub fn collection_path(&self, source: DataSource) -> PathBuf {
        self.data_dir.join(format!("{}.json", source.as_str()))
    }

    fn read_collection(&self, source: DataSource, path: &Path) -> SourceResult<Vec<Value>> {
        let content = fs::read_to_string(path)
            .map_err(|e| SourceError::unavailable(source, format!("read {}: {}", path.display(), e)))?;

        let parsed: Value = serde_json::from_str(&content)
            .map_err(|e| SourceError::unavailable(source, format!("parse {}: {}", path.display(), e)))?;

        match parsed {
            Value::Array(records) => Ok(records),
            _ => Err(SourceError::unavailable(
                source,
                format!("{}: expected a JSON array of records", path.display()),
            )),
        }
    }
}

impl RecordSource for FileRecordSource {
    fn fetch_all(&self, source: DataSource) -> SourceResult<Vec<Value>> {
        let path = self.collection_path(source);
        self.read_collection(source, &path)
    }
}
