//! Filter Predicate subsystem for rapport
//!
//! Filters records strictly according to a flat predicate list.
//!
//! # Design Principles
//!
//! - All predicates must match (AND semantics); no OR or grouping
//! - Record values are compared in string form; numeric comparison applies
//!   only when both operands parse as numbers
//! - A missing attribute never matches and never errors
//! - A predicate on a field outside the source's catalog matches nothing

mod evaluator;
mod predicate;

pub use evaluator::{coerce_to_string, compare_scalar, PredicateFilter};
pub use predicate::{FilterOperator, FilterPredicate};
