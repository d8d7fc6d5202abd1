//! # REST API Errors
//!
//! HTTP projection of the library error taxonomy. Every failure becomes a
//! status-coded JSON body; "no rows matched" is a success and never routes
//! through here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::definition::StoreError;
use crate::executor::ExecuteError;
use crate::source::SourceError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Invalid request body
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Source tag outside the closed set
    #[error("{0}")]
    UnknownSource(String),

    /// Definition failed validation; carries the offending field
    #[error("Invalid report definition: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Unknown definition id
    #[error("Report definition not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Record source unreachable
    #[error("Data source unavailable: {0}")]
    SourceUnavailable(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::UnknownSource(_) => StatusCode::BAD_REQUEST,
            RestError::Validation { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::SourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The offending field, when validation rejected a definition
    fn field(&self) -> Option<String> {
        match self {
            RestError::Validation { field, .. } => Some(field.clone()),
            _ => None,
        }
    }
}

impl From<CatalogError> for RestError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownDataSource(tag) => RestError::UnknownSource(tag),
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation { field, reason } => RestError::Validation {
                field: field.to_string(),
                reason,
            },
            StoreError::NotFound(_) => RestError::NotFound,
            StoreError::Persistence(reason) => RestError::Internal(reason),
        }
    }
}

impl From<SourceError> for RestError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Unavailable { .. } => RestError::SourceUnavailable(err.to_string()),
        }
    }
}

impl From<ExecuteError> for RestError {
    fn from(err: ExecuteError) -> Self {
        match err {
            ExecuteError::Source(e) => e.into(),
            ExecuteError::Store(e) => e.into(),
            ExecuteError::Export(e) => RestError::Internal(e.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    /// Offending field on validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            field: err.field(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
