//! Error types for the team store

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in the team store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No team with this id exists for the match
    #[error("Team {id} not found for match {match_id}")]
    TeamNotFound { match_id: String, id: Uuid },
}
