//! # REST HTTP Server
//!
//! Axum-based HTTP server for the report endpoints.
//!
//! Routes:
//! - `GET    /health`
//! - `GET    /catalog/sources`
//! - `GET    /catalog/sources/:source/fields`
//! - `POST   /reports`
//! - `GET    /reports`
//! - `GET    /reports/:id`
//! - `PUT    /reports/:id`
//! - `DELETE /reports/:id`
//! - `GET    /reports/:id/execute`
//! - `GET    /reports/:id/export`
//! - `POST   /reports/preview`

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use uuid::Uuid;

use crate::catalog::{self, DataSource, FieldDescriptor};
use crate::config::RapportConfig;
use crate::definition::{DefinitionStore, ReportDefinition, ReportDraft};
use crate::executor::{ExecutionService, PreviewRequest, ReportResult};
use crate::export::{CsvExporter, ExportSink};
use crate::observability::{Logger, Severity};
use crate::source::RecordSource;

use super::errors::RestResult;
use super::response::{DeleteResponse, ListResponse, SingleResponse};

/// REST API server state
pub struct RestServer<R: RecordSource, S: DefinitionStore> {
    config: RapportConfig,
    service: ExecutionService<R, S>,
}

impl<R: RecordSource + 'static, S: DefinitionStore + 'static> RestServer<R, S> {
    pub fn new(config: RapportConfig, service: ExecutionService<R, S>) -> Self {
        Self { config, service }
    }

    /// Build the axum router
    pub fn router(self) -> Router {
        let cors = Self::cors_layer(&self.config);
        let state = Arc::new(self);

        Router::new()
            .route("/health", get(health_handler))
            .route("/catalog/sources", get(sources_handler::<R, S>))
            .route("/catalog/sources/:source/fields", get(fields_handler::<R, S>))
            .route("/reports", post(create_handler::<R, S>))
            .route("/reports", get(list_handler::<R, S>))
            .route("/reports/preview", post(preview_handler::<R, S>))
            .route("/reports/:id", get(get_handler::<R, S>))
            .route("/reports/:id", put(update_handler::<R, S>))
            .route("/reports/:id", delete(delete_handler::<R, S>))
            .route("/reports/:id/execute", get(execute_handler::<R, S>))
            .route("/reports/:id/export", get(export_handler::<R, S>))
            .layer(cors)
            .with_state(state)
    }

    fn cors_layer(config: &RapportConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let router = self.router();

        let listener = TcpListener::bind(&addr).await?;
        Logger::log(Severity::Info, "server_started", &[("addr", &addr)]);
        axum::serve(listener, router).await
    }
}

/// Shared state type
type ServerState<R, S> = Arc<RestServer<R, S>>;

/// One data source entry in the catalog listing
#[derive(Debug, Serialize)]
struct SourceEntry {
    id: &'static str,
    fields: usize,
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

async fn sources_handler<R: RecordSource + 'static, S: DefinitionStore + 'static>(
    State(_server): State<ServerState<R, S>>,
) -> Json<ListResponse<SourceEntry>> {
    let sources: Vec<SourceEntry> = DataSource::ALL
        .iter()
        .map(|s| SourceEntry {
            id: s.as_str(),
            fields: catalog::fields_for(*s).len(),
        })
        .collect();
    Json(ListResponse::new(sources))
}

async fn fields_handler<R: RecordSource + 'static, S: DefinitionStore + 'static>(
    State(_server): State<ServerState<R, S>>,
    Path(source): Path<String>,
) -> RestResult<Json<ListResponse<FieldDescriptor>>> {
    let source = DataSource::parse(&source)?;
    let fields = catalog::fields_for(source).to_vec();
    Ok(Json(ListResponse::new(fields)))
}

async fn create_handler<R: RecordSource + 'static, S: DefinitionStore + 'static>(
    State(server): State<ServerState<R, S>>,
    Json(draft): Json<ReportDraft>,
) -> RestResult<(StatusCode, Json<SingleResponse<ReportDefinition>>)> {
    let definition = server.service.store().create(draft)?;
    Logger::log(
        Severity::Info,
        "definition_created",
        &[("id", &definition.id.to_string()), ("name", &definition.name)],
    );
    Ok((StatusCode::CREATED, Json(SingleResponse::new(definition))))
}

async fn list_handler<R: RecordSource + 'static, S: DefinitionStore + 'static>(
    State(server): State<ServerState<R, S>>,
) -> RestResult<Json<ListResponse<ReportDefinition>>> {
    let definitions = server.service.store().list()?;
    Ok(Json(ListResponse::new(definitions)))
}

async fn get_handler<R: RecordSource + 'static, S: DefinitionStore + 'static>(
    State(server): State<ServerState<R, S>>,
    Path(id): Path<Uuid>,
) -> RestResult<Json<SingleResponse<ReportDefinition>>> {
    let definition = server.service.store().get(id)?;
    Ok(Json(SingleResponse::new(definition)))
}

async fn update_handler<R: RecordSource + 'static, S: DefinitionStore + 'static>(
    State(server): State<ServerState<R, S>>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ReportDraft>,
) -> RestResult<Json<SingleResponse<ReportDefinition>>> {
    let definition = server.service.store().update(id, draft)?;
    Logger::log(
        Severity::Info,
        "definition_updated",
        &[("id", &definition.id.to_string()), ("name", &definition.name)],
    );
    Ok(Json(SingleResponse::new(definition)))
}

async fn delete_handler<R: RecordSource + 'static, S: DefinitionStore + 'static>(
    State(server): State<ServerState<R, S>>,
    Path(id): Path<Uuid>,
) -> RestResult<Json<DeleteResponse>> {
    server.service.store().delete(id)?;
    Logger::log(Severity::Info, "definition_deleted", &[("id", &id.to_string())]);
    Ok(Json(DeleteResponse::success()))
}

async fn execute_handler<R: RecordSource + 'static, S: DefinitionStore + 'static>(
    State(server): State<ServerState<R, S>>,
    Path(id): Path<Uuid>,
) -> RestResult<Json<ReportResult>> {
    let result = server.service.run(id)?;
    Ok(Json(result))
}

async fn export_handler<R: RecordSource + 'static, S: DefinitionStore + 'static>(
    State(server): State<ServerState<R, S>>,
    Path(id): Path<Uuid>,
) -> RestResult<impl IntoResponse> {
    let sink = CsvExporter::new();
    let document = server.service.run_export(id, &sink)?;

    let disposition = format!("attachment; filename=\"report.{}\"", sink.file_extension());
    Ok((
        [
            (header::CONTENT_TYPE, sink.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    ))
}

async fn preview_handler<R: RecordSource + 'static, S: DefinitionStore + 'static>(
    State(server): State<ServerState<R, S>>,
    Json(request): Json<PreviewRequest>,
) -> RestResult<Json<ReportResult>> {
    let result = server.service.preview(&request)?;
    Ok(Json(result))
}
