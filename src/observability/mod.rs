//! Observability subsystem for rapport
//!
//! Structured logging for definition lifecycle and execution events.
//!
//! # Design Principles
//!
//! - Structured logs (JSON), one line per event
//! - Deterministic key ordering
//! - Synchronous, no buffering

mod logger;

pub use logger::{Logger, Severity};
