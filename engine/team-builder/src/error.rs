//! Error types for the composition engine

use thiserror::Error;

/// Result type alias for composition operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while assembling or saving a lineup.
///
/// These are the recoverable, user-facing rule violations; callers decide how
/// to surface them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The roster failed validation; the itemized reasons are carried along
    #[error("Roster is not ready to save: {}", errors.join("; "))]
    InvalidRoster { errors: Vec<String> },

    /// Attempted to give one player both captaincy roles
    #[error("Captain and Vice-Captain must be different players")]
    CaptaincyConflict,

    /// Captaincy was offered to a player outside the current roster
    #[error("Player {0} is not in the current roster")]
    NotInRoster(String),

    #[error("Please select a Captain before saving")]
    MissingCaptain,

    #[error("Please select a Vice-Captain before saving")]
    MissingViceCaptain,
}
