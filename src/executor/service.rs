//! Execution service
//!
//! Drives the report pipeline against a record source and, for the run path,
//! stamps `last_run_at` on the definition store. Each invocation is
//! independent; nothing is retained between calls.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::catalog::{self, DataSource};
use crate::definition::{DefinitionStore, ReportDefinition, SortSpec};
use crate::export::ExportSink;
use crate::filter::{coerce_to_string, FilterPredicate, PredicateFilter};
use crate::observability::{Logger, Severity};
use crate::source::RecordSource;

use super::errors::ExecuteResult;
use super::projection::Projector;
use super::result::ReportResult;
use super::sorter::RowSorter;

/// Row cap applied to previews when the caller does not supply one
pub const DEFAULT_PREVIEW_LIMIT: usize = 50;

/// An ad hoc execution request, not backed by a saved definition
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewRequest {
    /// Target record collection
    pub data_source: DataSource,
    /// Ordered field ids to project
    pub fields: Vec<String>,
    /// Flat predicate list, combined with AND
    #[serde(default)]
    pub filters: Vec<FilterPredicate>,
    /// Optional single-key sort
    #[serde(default)]
    pub sort: Option<SortSpec>,
    /// Row cap; defaults to `DEFAULT_PREVIEW_LIMIT`
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Report execution service
pub struct ExecutionService<R: RecordSource, S: DefinitionStore> {
    records: Arc<R>,
    store: Arc<S>,
}

impl<R: RecordSource, S: DefinitionStore> ExecutionService<R, S> {
    /// Creates a service over a record source and a definition store
    pub fn new(records: Arc<R>, store: Arc<S>) -> Self {
        Self { records, store }
    }

    /// Returns the definition store backing the run path
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Executes a definition over the full filtered set.
    ///
    /// Does not touch the store; use [`run`](Self::run) to stamp
    /// `last_run_at`.
    pub fn execute(&self, definition: &ReportDefinition) -> ExecuteResult<ReportResult> {
        let result = self.pipeline(
            definition.data_source,
            &definition.fields,
            &definition.filters,
            definition.sort.as_ref(),
            None,
        )?;

        Logger::log(
            Severity::Info,
            "report_executed",
            &[
                ("source", definition.data_source.as_str()),
                ("report", &definition.name),
                ("rows", &result.len().to_string()),
            ],
        );
        Ok(result)
    }

    /// Loads a definition, executes it, and stamps `last_run_at`.
    ///
    /// The stamp is idempotent and order-insensitive; concurrent runs of the
    /// same definition may stamp in either order.
    pub fn run(&self, id: Uuid) -> ExecuteResult<ReportResult> {
        let definition = self.store.get(id)?;
        let result = self.execute(&definition)?;
        self.store.stamp_last_run(id, Utc::now())?;
        Ok(result)
    }

    /// Executes an ad hoc request with a bounded row count.
    ///
    /// `total_count` still reflects the full filtered set. Never stamps
    /// `last_run_at`.
    pub fn preview(&self, request: &PreviewRequest) -> ExecuteResult<ReportResult> {
        let limit = request.limit.unwrap_or(DEFAULT_PREVIEW_LIMIT);
        let result = self.pipeline(
            request.data_source,
            &request.fields,
            &request.filters,
            request.sort.as_ref(),
            Some(limit),
        )?;

        Logger::log(
            Severity::Info,
            "report_previewed",
            &[
                ("source", request.data_source.as_str()),
                ("rows", &result.len().to_string()),
                ("total", &result.total_count.to_string()),
            ],
        );
        Ok(result)
    }

    /// Executes a definition and renders the result through an export sink.
    ///
    /// Columns carry catalog labels; cells carry the projected string forms.
    pub fn export(
        &self,
        definition: &ReportDefinition,
        sink: &dyn ExportSink,
    ) -> ExecuteResult<Vec<u8>> {
        let result = self.execute(definition)?;

        let columns: Vec<String> = definition
            .fields
            .iter()
            .map(|f| catalog::label_for(definition.data_source, f).to_string())
            .collect();

        let rows: Vec<Vec<String>> = result
            .rows
            .iter()
            .map(|row| row.values().map(coerce_to_string).collect())
            .collect();

        let document = sink.render_table(&columns, &rows)?;

        Logger::log(
            Severity::Info,
            "export_rendered",
            &[
                ("report", &definition.name),
                ("rows", &rows.len().to_string()),
                ("bytes", &document.len().to_string()),
            ],
        );
        Ok(document)
    }

    /// Loads a definition, exports it, and stamps `last_run_at`
    pub fn run_export(&self, id: Uuid, sink: &dyn ExportSink) -> ExecuteResult<Vec<u8>> {
        let definition = self.store.get(id)?;
        let document = self.export(&definition, sink)?;
        self.store.stamp_last_run(id, Utc::now())?;
        Ok(document)
    }

    /// The pipeline: fetch, filter, project, sort, limit.
    fn pipeline(
        &self,
        source: DataSource,
        fields: &[String],
        filters: &[FilterPredicate],
        sort: Option<&SortSpec>,
        limit: Option<usize>,
    ) -> ExecuteResult<ReportResult> {
        let records = self.records.fetch_all(source).map_err(|e| {
            Logger::log_stderr(
                Severity::Error,
                "source_error",
                &[("source", source.as_str()), ("error", &e.to_string())],
            );
            e
        })?;

        // A predicate on a field outside the source's catalog matches no
        // record, and with AND semantics the whole filter set matches none.
        let filters_bound = filters.iter().all(|p| catalog::has_field(source, &p.field));

        let matched: Vec<Value> = if filters_bound {
            records
                .into_iter()
                .filter(|record| PredicateFilter::matches_all(record, filters))
                .collect()
        } else {
            Vec::new()
        };

        let total_count = matched.len();
        let mut rows = Projector::project(&matched, fields);

        if let Some(spec) = sort {
            RowSorter::sort(&mut rows, spec);
        }

        if let Some(limit) = limit {
            rows.truncate(limit);
        }

        Ok(ReportResult { rows, total_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{MemoryDefinitionStore, ReportDraft, SortSpec};
    use crate::executor::ExecuteError;
    use crate::export::CsvExporter;
    use crate::filter::FilterPredicate;
    use crate::source::{MemoryRecordSource, SourceError};
    use serde_json::json;

    fn employees() -> Vec<Value> {
        vec![
            json!({"employee_id": "e1", "name": "Ada", "dept": "Eng", "salary": 100}),
            json!({"employee_id": "e2", "name": "Sal", "dept": "Sales", "salary": 50}),
            json!({"employee_id": "e3", "name": "Eve", "dept": "Eng", "salary": 200}),
        ]
    }

    fn service_with(
        records: MemoryRecordSource,
    ) -> ExecutionService<MemoryRecordSource, MemoryDefinitionStore> {
        ExecutionService::new(Arc::new(records), Arc::new(MemoryDefinitionStore::new()))
    }

    fn seeded_service() -> ExecutionService<MemoryRecordSource, MemoryDefinitionStore> {
        service_with(MemoryRecordSource::new().seed(DataSource::Employees, employees()))
    }

    fn eng_salaries_draft() -> ReportDraft {
        ReportDraft::new("Eng salaries", DataSource::Employees, vec!["dept", "salary"])
            .with_filter(FilterPredicate::equals("dept", "Eng"))
            .with_sort(SortSpec::descending("salary"))
    }

    #[test]
    fn test_filter_project_sort_pipeline() {
        let service = seeded_service();
        let definition = service.store().create(eng_salaries_draft()).unwrap();

        let result = service.execute(&definition).unwrap();

        assert_eq!(result.total_count, 2);
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0]["salary"], json!(200));
        assert_eq!(result.rows[1]["salary"], json!(100));
        let keys: Vec<&String> = result.rows[0].keys().collect();
        assert_eq!(keys, vec!["dept", "salary"]);
    }

    #[test]
    fn test_run_stamps_last_run_at() {
        let service = seeded_service();
        let definition = service.store().create(eng_salaries_draft()).unwrap();
        assert!(definition.last_run_at.is_none());

        service.run(definition.id).unwrap();

        let stamped = service.store().get(definition.id).unwrap();
        assert!(stamped.last_run_at.is_some());
    }

    #[test]
    fn test_execute_does_not_stamp() {
        let service = seeded_service();
        let definition = service.store().create(eng_salaries_draft()).unwrap();

        service.execute(&definition).unwrap();

        assert!(service.store().get(definition.id).unwrap().last_run_at.is_none());
    }

    #[test]
    fn test_preview_truncates_but_counts_all() {
        let service = seeded_service();
        let request = PreviewRequest {
            data_source: DataSource::Employees,
            fields: vec!["name".to_string()],
            filters: Vec::new(),
            sort: None,
            limit: Some(2),
        };

        let result = service.preview(&request).unwrap();

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.total_count, 3);
        assert!(result.truncated());
    }

    #[test]
    fn test_preview_default_limit() {
        let many: Vec<Value> = (0..120).map(|i| json!({"name": format!("emp{}", i)})).collect();
        let service = service_with(MemoryRecordSource::new().seed(DataSource::Employees, many));

        let request = PreviewRequest {
            data_source: DataSource::Employees,
            fields: vec!["name".to_string()],
            filters: Vec::new(),
            sort: None,
            limit: None,
        };

        let result = service.preview(&request).unwrap();
        assert_eq!(result.rows.len(), DEFAULT_PREVIEW_LIMIT);
        assert_eq!(result.total_count, 120);
    }

    #[test]
    fn test_preview_never_stamps() {
        let service = seeded_service();
        let definition = service.store().create(eng_salaries_draft()).unwrap();

        let request = PreviewRequest {
            data_source: definition.data_source,
            fields: definition.fields.clone(),
            filters: definition.filters.clone(),
            sort: definition.sort.clone(),
            limit: None,
        };
        service.preview(&request).unwrap();

        assert!(service.store().get(definition.id).unwrap().last_run_at.is_none());
    }

    #[test]
    fn test_out_of_catalog_filter_matches_nothing() {
        let service = seeded_service();
        let definition = service
            .store()
            .create(
                ReportDraft::new("Ghost filter", DataSource::Employees, vec!["name"])
                    .with_filter(FilterPredicate::equals("gross_pay", "100")),
            )
            .unwrap();

        let result = service.execute(&definition).unwrap();
        assert_eq!(result.total_count, 0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_unavailable_source_is_an_error() {
        let service = service_with(MemoryRecordSource::new());
        let definition = service.store().create(eng_salaries_draft()).unwrap();

        let err = service.execute(&definition).unwrap_err();
        assert!(matches!(
            err,
            ExecuteError::Source(SourceError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_failed_run_does_not_stamp() {
        let service = service_with(MemoryRecordSource::new());
        let definition = service.store().create(eng_salaries_draft()).unwrap();

        assert!(service.run(definition.id).is_err());
        assert!(service.store().get(definition.id).unwrap().last_run_at.is_none());
    }

    #[test]
    fn test_export_uses_catalog_labels() {
        let service = seeded_service();
        let definition = service.store().create(eng_salaries_draft()).unwrap();

        let document = service.export(&definition, &CsvExporter::new()).unwrap();
        let csv = String::from_utf8(document).unwrap();

        assert!(csv.starts_with("Department,Salary\n"));
        assert!(csv.contains("Eng,200"));
        assert!(csv.contains("Eng,100"));
    }
}
