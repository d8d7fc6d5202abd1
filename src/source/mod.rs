//! Record Source subsystem for rapport
//!
//! A record source backs each data source with raw records. The execution
//! pipeline only needs `fetch_all`; how a collection is stored is not this
//! crate's concern.
//!
//! # Design Principles
//!
//! - An unreachable collection is a typed failure, never an empty success
//! - Sources are read-only; the pipeline performs no writes through them
//! - Record order as fetched is the order reports preserve absent a sort

mod errors;
mod file;
mod memory;

pub use errors::{SourceError, SourceResult};
pub use file::FileRecordSource;
pub use memory::MemoryRecordSource;

use serde_json::Value;

use crate::catalog::DataSource;

/// Capability to fetch all raw records of a collection
pub trait RecordSource: Send + Sync {
    /// Fetches every record of the given collection, in source order
    fn fetch_all(&self, source: DataSource) -> SourceResult<Vec<Value>>;
}
