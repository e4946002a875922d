//! # Team Store
//!
//! Persistence for finished lineups. Saved teams are namespaced by match id
//! and stored as plain JSON documents, one list per match — a deliberate
//! key-value shape with read-modify-write semantics and last-write-wins on
//! concurrent edits (the system is single-user-local by design).
//!
//! ## Architecture
//!
//! - **TeamStore**: abstract trait over the keyed storage
//! - **InMemoryTeamStore**: HashMap-backed, for tests and ephemeral sessions
//! - **LocalTeamStore**: one JSON file per match under a data directory
//! - **TeamService**: the create/list/update/delete lifecycle over any store

pub mod backend;
pub mod config;
pub mod error;
pub mod local;
pub mod service;
pub mod types;

pub use backend::{InMemoryTeamStore, TeamStore};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use local::LocalTeamStore;
pub use service::TeamService;
pub use types::TeamRecord;
