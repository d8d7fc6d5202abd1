//! Field projection for report execution
//!
//! Selects the requested fields from each matched record. The requested
//! order is the column order of every row, regardless of record key order.

use indexmap::IndexMap;
use serde_json::Value;

/// Placeholder rendered for attributes a record does not carry
pub const MISSING_VALUE: &str = "-";

/// One result row: field id to value, in requested column order
pub type Row = IndexMap<String, Value>;

/// Projects records onto an ordered field set
pub struct Projector;

impl Projector {
    /// Projects every record, preserving record order
    pub fn project(records: &[Value], fields: &[String]) -> Vec<Row> {
        records
            .iter()
            .map(|record| Self::project_record(record, fields))
            .collect()
    }

    /// Projects a single record.
    ///
    /// Absent or null attributes become the placeholder, never null.
    pub fn project_record(record: &Value, fields: &[String]) -> Row {
        let mut row = Row::with_capacity(fields.len());
        for field in fields {
            let value = match record.get(field) {
                Some(v) if !v.is_null() => v.clone(),
                _ => Value::String(MISSING_VALUE.to_string()),
            };
            row.insert(field.clone(), value);
        }
        row
    }
}
