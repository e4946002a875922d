//! Team Builder - lineup composition engine
//!
//! The rules and state machine for assembling an 11-player fantasy cricket
//! lineup: roster selection with toggle semantics, captain/vice-captain
//! assignment under mutual exclusion, and validation of a finished roster
//! against the league constraints (credit budget, role quotas, per-team cap).
//!
//! Everything here is synchronous and in-memory; one [`TeamBuilder`] owns the
//! editing session for one match. Expected rule violations are reported as
//! data ([`ValidationReport`]) or typed errors ([`BuildError`]) — the engine
//! never panics on them.

pub mod builder;
pub mod captaincy;
pub mod error;
pub mod selection;
pub mod validation;

pub use builder::{TeamBuilder, TeamSheet};
pub use captaincy::Captaincy;
pub use error::{BuildError, Result};
pub use selection::{Selection, ToggleOutcome};
pub use validation::{
    role_counts, team_counts, total_credits, validate, RoleCounts, ValidationReport,
    MAX_FROM_ONE_TEAM, MAX_TOTAL_CREDITS, ROSTER_SIZE,
};
