//! # REST API
//!
//! Thin axum layer over the report library contract. Owns no semantics of
//! its own: every handler resolves to a store or execution service call and
//! maps the typed error onto an HTTP status.

mod errors;
mod response;
mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use response::{DeleteResponse, ListResponse, SingleResponse};
pub use server::RestServer;
