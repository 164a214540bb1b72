//! Error types for gdo

use thiserror::Error;

/// Result type alias for gdo operations
pub type GdoResult<T> = Result<T, GdoError>;

/// Error types for database operations
#[derive(Debug, Error)]
pub enum GdoError {
    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Unsupported `db_type` in a [`Protocol`](crate::Protocol)
    #[error("Invalid database type {{{0}}}")]
    InvalidDbType(String),

    /// Missing or malformed connection settings
    #[error("Config error: {0}")]
    Config(String),

    /// Query execution error, passed through from the driver unchanged
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// A single-row query returned no rows
    #[error("no rows in result set")]
    NoRows,

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Statement/argument mismatch detected before dispatch
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GdoError {
    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a "no rows" error
    pub fn is_no_rows(&self) -> bool {
        matches!(self, Self::NoRows)
    }

    /// Check if the driver reported a closed connection
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Query(err) if err.is_closed())
    }

    /// Wrap a driver error. Driver errors are never reinterpreted.
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        Self::Query(err)
    }
}
