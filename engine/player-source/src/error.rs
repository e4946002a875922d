//! Error types for player ingestion

use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors that can occur while ingesting upstream data
#[derive(Error, Debug)]
pub enum SourceError {
    /// I/O errors (reading payload files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload shapes the boundary refuses to guess at
    #[error("Malformed payload: {0}")]
    MalformedPayload(&'static str),
}
