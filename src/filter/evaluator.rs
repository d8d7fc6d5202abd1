//! Predicate evaluation over raw records
//!
//! Record attributes are coerced to string form before comparison. Ordering
//! operators compare numerically when both operands parse as numbers and fall
//! back to lexicographic comparison otherwise.

use serde_json::Value;
use std::cmp::Ordering;

use super::predicate::{FilterOperator, FilterPredicate};

/// Evaluates predicates against records
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a record matches all predicates (AND semantics)
    pub fn matches_all(record: &Value, predicates: &[FilterPredicate]) -> bool {
        predicates.iter().all(|pred| Self::matches(record, pred))
    }

    /// Checks if a record matches a single predicate.
    ///
    /// A missing or null attribute evaluates false, never an error.
    pub fn matches(record: &Value, predicate: &FilterPredicate) -> bool {
        let actual = match record.get(&predicate.field) {
            Some(v) if !v.is_null() => coerce_to_string(v),
            _ => return false,
        };

        match predicate.operator {
            FilterOperator::Equals => actual == predicate.value,
            FilterOperator::Contains => actual
                .to_lowercase()
                .contains(&predicate.value.to_lowercase()),
            FilterOperator::GreaterThan => {
                compare_scalar(&actual, &predicate.value) == Ordering::Greater
            }
            FilterOperator::LessThan => {
                compare_scalar(&actual, &predicate.value) == Ordering::Less
            }
        }
    }
}

/// Coerces a record attribute to its string form.
///
/// Strings pass through unquoted; other scalars and composites use their
/// JSON rendering.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Compares two string forms: numeric when both parse as numbers, else
/// lexicographic.
pub fn compare_scalar(a: &str, b: &str) -> Ordering {
    if let (Ok(a_num), Ok(b_num)) = (a.parse::<f64>(), b.parse::<f64>()) {
        return a_num.partial_cmp(&b_num).unwrap_or(Ordering::Equal);
    }
    a.cmp(b)
}
