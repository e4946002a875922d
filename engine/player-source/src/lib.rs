//! Player Source - ingestion boundary for upstream player and match data
//!
//! Upstream feeds disagree on field naming (`id` vs `Player_Id` vs
//! `player_id`, `Credits` vs `event_player_credit`, and so on). This crate
//! probes the synonymous keys exactly once, at ingestion, and hands the rest
//! of the engine a single strict [`Player`] shape. It also owns the canonical
//! role vocabulary and the read-only [`PlayerPool`] used to browse and filter
//! the ingested players.

pub mod adapter;
pub mod error;
pub mod pool;
pub mod role;
pub mod types;

pub use adapter::{matches_from_value, players_from_value};
pub use error::{Result, SourceError};
pub use pool::{PlayerFilter, PlayerPool};
pub use role::{normalize_role, Role, RoleTag};
pub use types::{MatchInfo, Player};
