//! Report Definition subsystem for rapport
//!
//! A report definition names a data source, an ordered field set, a flat
//! filter list, and an optional sort. Definitions are owned by the store.
//!
//! # Design Principles
//!
//! - Created on explicit save; mutated only via full replacement; deleted
//!   on explicit delete
//! - Validation before any write; violations name the offending field
//! - Concurrent updates to one id are last-write-wins; no locking token

mod errors;
mod file_store;
mod model;
mod store;

pub use errors::{StoreError, StoreResult};
pub use file_store::FileDefinitionStore;
pub use model::{ReportDefinition, ReportDraft, SortOrder, SortSpec};
pub use store::{validate_draft, DefinitionStore, MemoryDefinitionStore};
