//! Error types for the appointments tracker.

use thiserror::Error;

/// Errors that can occur in appointments operations.
#[derive(Error, Debug)]
pub enum AppointmentsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Rejections raised when submitting the entry form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Date and description cannot be empty")]
    EmptyFields,
}

/// Result type alias for appointments operations.
pub type AppointmentsResult<T> = Result<T, AppointmentsError>;
