//! Error handling module for logcop
//!
//! Provides centralized error types using thiserror. Store operations use
//! `StoreError`; field access uses `FieldError`; loading form input and
//! turning submission outcomes into `Result`s use `LogcopError`.

use thiserror::Error;

/// Main error type for logcop
#[derive(Error, Debug)]
pub enum LogcopError {
    /// IO errors (form input files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors (form input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for logcop operations
pub type Result<T> = std::result::Result<T, LogcopError>;

impl LogcopError {
    /// Create a validation error from a list of violation messages
    pub fn validation(errors: &[String]) -> Self {
        Self::Validation(errors.join("; "))
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

/// Errors raised by a record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A stored timestamp could not be parsed back
    #[error("invalid timestamp '{value}' in {table}")]
    Timestamp { table: &'static str, value: String },

    /// A stored row holds a value the record type cannot represent
    #[error("corrupt row in {table}: {reason}")]
    Corrupt { table: &'static str, reason: String },
}

/// Errors raised while reading raw form fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("field '{field}' is not a whole number: '{value}'")]
    NotAnInteger { field: String, value: String },
}
