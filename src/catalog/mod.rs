//! Field Catalog subsystem for rapport
//!
//! Every report is built against one of a closed set of data sources known
//! at compile time. The catalog maps each source to its selectable fields.
//!
//! # Design Principles
//!
//! - The source set is a closed enum; no dynamic registration
//! - Field sets are static and ordered; the order is the default column order
//! - Unknown source tags are rejected at the boundary, never guessed

mod errors;
mod fields;
mod source;

pub use errors::{CatalogError, CatalogResult};
pub use fields::{field_ids, fields_for, has_field, label_for, FieldDescriptor};
pub use source::DataSource;
