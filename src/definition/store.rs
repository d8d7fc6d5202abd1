//! Definition store trait and in-memory implementation
//!
//! The store is a simple keyed table. Listing returns definitions
//! most-recently-created first; creation order breaks timestamp ties so the
//! listing is deterministic.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::model::{ReportDefinition, ReportDraft};

/// CRUD contract for report definitions
pub trait DefinitionStore: Send + Sync {
    /// Validates and saves a new definition
    fn create(&self, draft: ReportDraft) -> StoreResult<ReportDefinition>;

    /// Replaces an existing definition wholesale
    fn update(&self, id: Uuid, draft: ReportDraft) -> StoreResult<ReportDefinition>;

    /// Deletes a definition
    fn delete(&self, id: Uuid) -> StoreResult<()>;

    /// Fetches a definition by id
    fn get(&self, id: Uuid) -> StoreResult<ReportDefinition>;

    /// Lists all definitions, most-recently-created first
    fn list(&self) -> StoreResult<Vec<ReportDefinition>>;

    /// Records a successful run against a definition
    fn stamp_last_run(&self, id: Uuid, at: DateTime<Utc>) -> StoreResult<()>;
}

/// Validates a draft before create or update.
///
/// The data source is already a member of the closed enum by construction,
/// so only name and field-set shape can be invalid here.
pub fn validate_draft(draft: &ReportDraft) -> StoreResult<()> {
    if draft.name.trim().is_empty() {
        return Err(StoreError::validation("name", "must not be empty"));
    }

    if draft.fields.is_empty() {
        return Err(StoreError::validation("fields", "must select at least one field"));
    }

    let mut seen = Vec::with_capacity(draft.fields.len());
    for field in &draft.fields {
        if seen.contains(&field.as_str()) {
            return Err(StoreError::validation(
                "fields",
                format!("duplicate field id: {}", field),
            ));
        }
        seen.push(field.as_str());
    }

    Ok(())
}

/// One stored definition plus its creation sequence number
#[derive(Debug, Clone)]
struct StoredEntry {
    seq: u64,
    definition: ReportDefinition,
}

/// Keyed table shared by the store implementations
#[derive(Debug, Default)]
pub(super) struct DefinitionTable {
    next_seq: u64,
    entries: HashMap<Uuid, StoredEntry>,
}

impl DefinitionTable {
    pub(super) fn create(&mut self, draft: ReportDraft) -> StoreResult<ReportDefinition> {
        validate_draft(&draft)?;
        let definition = ReportDefinition::from_draft(draft, Utc::now());
        let entry = StoredEntry {
            seq: self.next_seq,
            definition: definition.clone(),
        };
        self.next_seq += 1;
        self.entries.insert(definition.id, entry);
        Ok(definition)
    }

    pub(super) fn update(&mut self, id: Uuid, draft: ReportDraft) -> StoreResult<ReportDefinition> {
        validate_draft(&draft)?;
        let entry = self.entries.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        entry.definition.replace_from(draft);
        Ok(entry.definition.clone())
    }

    pub(super) fn delete(&mut self, id: Uuid) -> StoreResult<()> {
        self.entries
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    pub(super) fn get(&self, id: Uuid) -> StoreResult<ReportDefinition> {
        self.entries
            .get(&id)
            .map(|e| e.definition.clone())
            .ok_or(StoreError::NotFound(id))
    }

    pub(super) fn list(&self) -> Vec<ReportDefinition> {
        let mut entries: Vec<&StoredEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| {
            b.definition
                .created_at
                .cmp(&a.definition.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        entries.iter().map(|e| e.definition.clone()).collect()
    }

    pub(super) fn stamp_last_run(&mut self, id: Uuid, at: DateTime<Utc>) -> StoreResult<()> {
        let entry = self.entries.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        entry.definition.last_run_at = Some(at);
        Ok(())
    }

    /// Restores a definition with a fresh sequence number (load path)
    pub(super) fn restore(&mut self, definition: ReportDefinition) {
        let entry = StoredEntry {
            seq: self.next_seq,
            definition,
        };
        self.next_seq += 1;
        self.entries.insert(entry.definition.id, entry);
    }

    /// Snapshot in ascending creation order (persistence path)
    pub(super) fn snapshot(&self) -> Vec<ReportDefinition> {
        let mut listed = self.list();
        listed.reverse();
        listed
    }
}

/// In-memory definition store
#[derive(Debug, Default)]
pub struct MemoryDefinitionStore {
    table: RwLock<DefinitionTable>,
}

impl MemoryDefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DefinitionStore for MemoryDefinitionStore {
    fn create(&self, draft: ReportDraft) -> StoreResult<ReportDefinition> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::Persistence("lock poisoned".to_string()))?;
        table.create(draft)
    }

    fn update(&self, id: Uuid, draft: ReportDraft) -> StoreResult<ReportDefinition> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::Persistence("lock poisoned".to_string()))?;
        table.update(id, draft)
    }

    fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::Persistence("lock poisoned".to_string()))?;
        table.delete(id)
    }

    fn get(&self, id: Uuid) -> StoreResult<ReportDefinition> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::Persistence("lock poisoned".to_string()))?;
        table.get(id)
    }

    fn list(&self) -> StoreResult<Vec<ReportDefinition>> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::Persistence("lock poisoned".to_string()))?;
        Ok(table.list())
    }

    fn stamp_last_run(&self, id: Uuid, at: DateTime<Utc>) -> StoreResult<()> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::Persistence("lock poisoned".to_string()))?;
        table.stamp_last_run(id, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DataSource;

    fn draft(name: &str) -> ReportDraft {
        ReportDraft::new(name, DataSource::Employees, vec!["dept", "salary"])
    }

    #[test]
    fn test_create_and_get() {
        let store = MemoryDefinitionStore::new();
        let created = store.create(draft("Salaries")).unwrap();
        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let store = MemoryDefinitionStore::new();
        let err = store.create(draft("  ")).unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "name", .. }));
    }

    #[test]
    fn test_create_rejects_empty_fields() {
        let store = MemoryDefinitionStore::new();
        let mut d = draft("Salaries");
        d.fields.clear();
        let err = store.create(d).unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "fields", .. }));
    }

    #[test]
    fn test_create_rejects_duplicate_fields() {
        let store = MemoryDefinitionStore::new();
        let mut d = draft("Salaries");
        d.fields = vec!["dept".to_string(), "dept".to_string()];
        let err = store.create(d).unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "fields", .. }));
    }

    #[test]
    fn test_update_is_full_replacement() {
        let store = MemoryDefinitionStore::new();
        let created = store.create(draft("Before")).unwrap();

        let replacement = ReportDraft::new("After", DataSource::Payroll, vec!["net_pay"]);
        let updated = store.update(created.id, replacement.clone()).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.as_draft(), replacement);
        assert_eq!(store.get(created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_id() {
        let store = MemoryDefinitionStore::new();
        let err = store.update(Uuid::new_v4(), draft("X")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_delete_then_get_fails() {
        let store = MemoryDefinitionStore::new();
        let created = store.create(draft("Gone")).unwrap();
        store.delete(created.id).unwrap();
        assert!(matches!(store.get(created.id), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete(created.id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_list_most_recent_first() {
        let store = MemoryDefinitionStore::new();
        let first = store.create(draft("first")).unwrap();
        let second = store.create(draft("second")).unwrap();
        let third = store.create(draft("third")).unwrap();

        let listed = store.list().unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[test]
    fn test_stamp_last_run() {
        let store = MemoryDefinitionStore::new();
        let created = store.create(draft("Runnable")).unwrap();
        assert!(created.last_run_at.is_none());

        let at = Utc::now();
        store.stamp_last_run(created.id, at).unwrap();
        assert_eq!(store.get(created.id).unwrap().last_run_at, Some(at));
    }
}
