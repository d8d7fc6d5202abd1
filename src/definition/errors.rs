//! Definition store error types

use thiserror::Error;
use uuid::Uuid;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Definition store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Rejected save; carries the offending field
    #[error("invalid report definition: {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Unknown id on get/update/delete
    #[error("report definition not found: {0}")]
    NotFound(Uuid),

    /// Persistence failure (file-backed store only)
    #[error("definition persistence failure: {0}")]
    Persistence(String),
}

impl StoreError {
    /// Creates a validation error for the given field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_names_field() {
        let err = StoreError::validation("name", "must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid report definition: name: must not be empty"
        );
    }
}
