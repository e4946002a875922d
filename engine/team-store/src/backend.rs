//! Store trait and the in-memory implementation

use crate::error::Result;
use crate::types::TeamRecord;
use std::collections::HashMap;

/// Abstract keyed storage for saved teams.
///
/// The match id is the sole partition key; a match's teams are always read
/// and written as one list. Callers do read-modify-write with no locking —
/// last write wins, which is acceptable for a single-user-local system.
pub trait TeamStore {
    /// All saved teams for a match; a match never written reads as empty.
    fn get(&self, match_id: &str) -> Result<Vec<TeamRecord>>;

    /// Replace a match's team list.
    fn put(&mut self, match_id: &str, teams: Vec<TeamRecord>) -> Result<()>;
}

/// HashMap-backed store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamStore {
    teams: HashMap<String, Vec<TeamRecord>>,
}

impl InMemoryTeamStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TeamStore for InMemoryTeamStore {
    fn get(&self, match_id: &str) -> Result<Vec<TeamRecord>> {
        Ok(self.teams.get(match_id).cloned().unwrap_or_default())
    }

    fn put(&mut self, match_id: &str, teams: Vec<TeamRecord>) -> Result<()> {
        self.teams.insert(match_id.to_string(), teams);
        Ok(())
    }
}
