//! Report Executor subsystem for rapport
//!
//! The executor consumes a report shape and produces an ordered result.
//!
//! # Execution Flow (strict order)
//!
//! 1. Resolve the data source and fetch all records
//! 2. Filter records strictly according to predicates
//! 3. Project the requested fields, in order
//! 4. Apply sort (if specified)
//! 5. Apply the preview limit (preview only)
//! 6. Return ordered rows plus the full match count
//!
//! No state survives an invocation; the same definition over the same
//! records yields the same result.

mod errors;
mod projection;
mod result;
mod service;
mod sorter;

pub use errors::{ExecuteError, ExecuteResult};
pub use projection::{Projector, Row, MISSING_VALUE};
pub use result::ReportResult;
pub use service::{ExecutionService, PreviewRequest, DEFAULT_PREVIEW_LIMIT};
pub use sorter::RowSorter;
