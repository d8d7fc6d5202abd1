//! Row sorting for report execution
//!
//! Single-key, stable, deterministic. Comparison happens on the string form
//! of the projected value: numeric when both sides parse as numbers, else
//! lexicographic.

use crate::definition::{SortOrder, SortSpec};
use crate::filter::{coerce_to_string, compare_scalar};

use super::projection::{Row, MISSING_VALUE};

/// Sorts result rows
pub struct RowSorter;

impl RowSorter {
    /// Sorts rows in place according to the sort specification.
    ///
    /// The sort is stable: rows with equal keys keep their input order.
    /// A row without the sort key compares as the placeholder.
    pub fn sort(rows: &mut [Row], spec: &SortSpec) {
        rows.sort_by(|a, b| {
            let a_key = Self::sort_key(a, &spec.field);
            let b_key = Self::sort_key(b, &spec.field);

            let ordering = compare_scalar(&a_key, &b_key);

            match spec.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    fn sort_key(row: &Row, field: &str) -> String {
        row.get(field)
            .map(coerce_to_string)
            .unwrap_or_else(|| MISSING_VALUE.to_string())
    }
}
