//! Preview Bound Tests
//!
//! Preview runs the same pipeline as execute with a row cap:
//! - Rows never exceed the limit; `total_count` is the unbounded match count
//! - The default cap applies when the caller supplies none
//! - Preview never stamps `last_run_at`

use std::sync::Arc;

use rapport::catalog::DataSource;
use rapport::definition::{DefinitionStore, MemoryDefinitionStore, ReportDraft, SortSpec};
use rapport::executor::{ExecutionService, PreviewRequest, DEFAULT_PREVIEW_LIMIT};
use rapport::filter::FilterPredicate;
use rapport::source::MemoryRecordSource;
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn many_employees(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({"name": format!("emp{:03}", i), "dept": "Eng", "salary": 10 * i}))
        .collect()
}

fn service_over(
    records: Vec<Value>,
) -> ExecutionService<MemoryRecordSource, MemoryDefinitionStore> {
    let source = MemoryRecordSource::new().seed(DataSource::Employees, records);
    ExecutionService::new(Arc::new(source), Arc::new(MemoryDefinitionStore::new()))
}

fn preview(fields: Vec<&str>, limit: Option<usize>) -> PreviewRequest {
    PreviewRequest {
        data_source: DataSource::Employees,
        fields: fields.into_iter().map(String::from).collect(),
        filters: Vec::new(),
        sort: None,
        limit,
    }
}

// =============================================================================
// Bound Tests
// =============================================================================

#[test]
fn test_preview_truncates_to_limit() {
    let service = service_over(many_employees(10));

    let result = service.preview(&preview(vec!["name"], Some(3))).unwrap();

    assert_eq!(result.rows.len(), 3);
    assert_eq!(result.total_count, 10);
    assert!(result.truncated());
}

#[test]
fn test_preview_default_limit() {
    let service = service_over(many_employees(DEFAULT_PREVIEW_LIMIT + 25));

    let result = service.preview(&preview(vec!["name"], None)).unwrap();

    assert_eq!(result.rows.len(), DEFAULT_PREVIEW_LIMIT);
    assert_eq!(result.total_count, DEFAULT_PREVIEW_LIMIT + 25);
}

#[test]
fn test_preview_under_limit_returns_all() {
    let service = service_over(many_employees(5));

    let result = service.preview(&preview(vec!["name"], Some(50))).unwrap();

    assert_eq!(result.rows.len(), 5);
    assert_eq!(result.total_count, 5);
    assert!(!result.truncated());
}

/// Truncation happens after sort, so the preview shows the top of the
/// ordered set, not an arbitrary slice.
#[test]
fn test_preview_truncates_after_sort() {
    let service = service_over(many_employees(10));

    let mut request = preview(vec!["name", "salary"], Some(2));
    request.sort = Some(SortSpec::descending("salary"));

    let result = service.preview(&request).unwrap();
    assert_eq!(result.rows[0]["salary"], json!(90));
    assert_eq!(result.rows[1]["salary"], json!(80));
}

/// `total_count` counts the filtered set, not the whole collection.
#[test]
fn test_total_count_reflects_filters() {
    let mut records = many_employees(6);
    records.push(json!({"name": "outlier", "dept": "Sales", "salary": 1}));
    let service = service_over(records);

    let mut request = preview(vec!["name"], Some(2));
    request.filters = vec![FilterPredicate::equals("dept", "Eng")];

    let result = service.preview(&request).unwrap();
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.total_count, 6);
}

// =============================================================================
// State Tests
// =============================================================================

/// Preview does not require a saved definition and never stamps one.
#[test]
fn test_preview_does_not_stamp_saved_definitions() {
    let service = service_over(many_employees(3));
    let definition = service
        .store()
        .create(ReportDraft::new("Saved", DataSource::Employees, vec!["name"]))
        .unwrap();

    service.preview(&preview(vec!["name"], None)).unwrap();

    assert!(service.store().get(definition.id).unwrap().last_run_at.is_none());
}

/// Zero matches with a reachable source is an empty success.
#[test]
fn test_empty_match_is_success_not_error() {
    let service = service_over(many_employees(3));

    let mut request = preview(vec!["name"], None);
    request.filters = vec![FilterPredicate::equals("dept", "Legal")];

    let result = service.preview(&request).unwrap();
    assert_eq!(result.total_count, 0);
    assert!(result.rows.is_empty());
}
