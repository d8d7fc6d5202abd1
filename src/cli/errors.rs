//! CLI error types

use thiserror::Error;

use crate::definition::StoreError;
use crate::executor::ExecuteError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Definition file could not be read or parsed
    #[error("Definition file error: {0}")]
    Definition(String),

    /// Store failure (definition persistence)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Execution failure
    #[error(transparent)]
    Execute(#[from] ExecuteError),

    /// I/O failure (stdout, runtime)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = CliError::Config("missing port".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing port");
    }
}
