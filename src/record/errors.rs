//! Record ingestion errors
//!
//! Construction from backend JSON is the only fallible operation in the
//! crate. Everything downstream of a validated record is total.

use thiserror::Error;

/// Result type for record ingestion
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised while building a record from a backend payload
#[derive(Debug, Error)]
pub enum RecordError {
    /// Body failed to deserialize (missing field, wrong type, bad timestamp)
    #[error("invalid record body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Property bag values must be scalars (string, number, boolean, null)
    #[error("non-scalar value for property key: {0}")]
    NonScalarProperty(String),
}
