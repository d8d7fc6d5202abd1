//! rapport - A strict, deterministic report definition and execution engine
//!
//! Reports are defined against a closed set of tabular data sources,
//! filtered by a flat AND-only predicate list, projected onto an ordered
//! field set, optionally sorted by a single key, and returned as ordered
//! rows plus the full match count.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod definition;
pub mod executor;
pub mod export;
pub mod filter;
pub mod observability;
pub mod rest_api;
pub mod source;
