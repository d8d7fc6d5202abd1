//! File-backed definition store
//!
//! Definitions persist as one JSON document under the data directory. The
//! whole table is rewritten on every mutation: definitions are few and small,
//! and a full rewrite keeps the on-disk state trivially consistent.
//!
//! Writes go to a temporary file first and are renamed into place, so a crash
//! mid-write leaves the previous table intact.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::model::{ReportDefinition, ReportDraft};
use super::store::{DefinitionStore, DefinitionTable};

const DEFINITIONS_FILE: &str = "definitions.json";

/// Definition store persisted to `<data_dir>/definitions.json`
#[derive(Debug)]
pub struct FileDefinitionStore {
    path: PathBuf,
    table: RwLock<DefinitionTable>,
}

impl FileDefinitionStore {
    /// Opens the store, loading any existing definitions file.
    ///
    /// A missing file is an empty store; a malformed file is a persistence
    /// error, never silently discarded.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        fs::create_dir_all(data_dir)
            .map_err(|e| StoreError::Persistence(format!("create {}: {}", data_dir.display(), e)))?;

        let path = data_dir.join(DEFINITIONS_FILE);
        let mut table = DefinitionTable::default();

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| StoreError::Persistence(format!("read {}: {}", path.display(), e)))?;
            let definitions: Vec<ReportDefinition> = serde_json::from_str(&content)
                .map_err(|e| StoreError::Persistence(format!("parse {}: {}", path.display(), e)))?;
            for definition in definitions {
                table.restore(definition);
            }
        }

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, table: &DefinitionTable) -> StoreResult<()> {
        let snapshot = table.snapshot();
        let content = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| StoreError::Persistence(format!("serialize definitions: {}", e)))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .map_err(|e| StoreError::Persistence(format!("write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StoreError::Persistence(format!("rename {}: {}", tmp.display(), e)))?;
        Ok(())
    }

    fn write_table(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, DefinitionTable>> {
        self.table
            .write()
            .map_err(|_| StoreError::Persistence("lock poisoned".to_string()))
    }

    fn read_table(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, DefinitionTable>> {
        self.table
            .read()
            .map_err(|_| StoreError::Persistence("lock poisoned".to_string()))
    }
}

impl DefinitionStore for FileDefinitionStore {
    fn create(&self, draft: ReportDraft) -> StoreResult<ReportDefinition> {
        let mut table = self.write_table()?;
        let definition = table.create(draft)?;
        self.persist(&table)?;
        Ok(definition)
    }

    fn update(&self, id: Uuid, draft: ReportDraft) -> StoreResult<ReportDefinition> {
        let mut table = self.write_table()?;
        let definition = table.update(id, draft)?;
        self.persist(&table)?;
        Ok(definition)
    }

    fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut table = self.write_table()?;
        table.delete(id)?;
        self.persist(&table)
    }

    fn get(&self, id: Uuid) -> StoreResult<ReportDefinition> {
        self.read_table()?.get(id)
    }

    fn list(&self) -> StoreResult<Vec<ReportDefinition>> {
        Ok(self.read_table()?.list())
    }

    fn stamp_last_run(&self, id: Uuid, at: DateTime<Utc>) -> StoreResult<()> {
        let mut table = self.write_table()?;
        table.stamp_last_run(id, at)?;
        self.persist(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DataSource;
    use tempfile::TempDir;

    fn draft(name: &str) -> ReportDraft {
        ReportDraft::new(name, DataSource::Employees, vec!["dept", "salary"])
    }

    #[test]
    fn test_open_empty_dir() {
        let dir = TempDir::new().unwrap();
        let store = FileDefinitionStore::open(dir.path()).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_definitions_survive_reopen() {
        let dir = TempDir::new().unwrap();

        let id = {
            let store = FileDefinitionStore::open(dir.path()).unwrap();
            store.create(draft("Persisted")).unwrap().id
        };

        let store = FileDefinitionStore::open(dir.path()).unwrap();
        let fetched = store.get(id).unwrap();
        assert_eq!(fetched.name, "Persisted");
    }

    #[test]
    fn test_delete_persists() {
        let dir = TempDir::new().unwrap();
        let id = {
            let store = FileDefinitionStore::open(dir.path()).unwrap();
            let id = store.create(draft("Doomed")).unwrap().id;
            store.delete(id).unwrap();
            id
        };

        let store = FileDefinitionStore::open(dir.path()).unwrap();
        assert!(matches!(store.get(id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_list_order_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileDefinitionStore::open(dir.path()).unwrap();
            store.create(draft("first")).unwrap();
            store.create(draft("second")).unwrap();
        }

        let store = FileDefinitionStore::open(dir.path()).unwrap();
        let names: Vec<String> = store.list().unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn test_malformed_file_is_persistence_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFINITIONS_FILE), "not json").unwrap();
        let err = FileDefinitionStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Persistence(_)));
    }
}
