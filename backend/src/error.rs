//! Error handling for the farm records application
//!
//! The record service itself never fails: a missing id is reported as
//! `None` or `false`. These errors cover configuration, terminal I/O and
//! user input in the console front-end.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Input stream closed")]
    InputClosed,
}

impl AppError {
    /// Build a validation error from one of the `shared::validation` checks
    pub fn validation(field: impl Into<String>, message: &str) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.to_string(),
        }
    }

    /// Stable machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::InputClosed => "INPUT_CLOSED",
        }
    }
}

/// Result type alias for console and startup code
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = AppError::validation("area", "Value cannot be negative");
        assert_eq!(err.to_string(), "Validation error: Value cannot be negative");
        assert_eq!(err.code(), "VALIDATION_ERROR");
        match err {
            AppError::Validation { field, .. } => assert_eq!(field, "area"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> AppResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn test_input_closed_code() {
        assert_eq!(AppError::InputClosed.code(), "INPUT_CLOSED");
    }
}
