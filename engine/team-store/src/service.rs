//! Lifecycle of saved lineups over any [`TeamStore`].
//!
//! The service trusts its input: a [`TeamSheet`] only exists once a builder
//! session has validated the roster and both captaincy roles, so none of
//! that is re-checked here.

use crate::backend::TeamStore;
use crate::error::{Result, StoreError};
use crate::types::TeamRecord;
use team_builder::TeamSheet;
use tracing::info;
use uuid::Uuid;

/// Create/list/update/delete for one store.
#[derive(Debug)]
pub struct TeamService<S> {
    store: S,
}

impl<S: TeamStore> TeamService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a finished lineup as a new record and return it.
    pub fn create(&mut self, match_id: &str, sheet: TeamSheet) -> Result<TeamRecord> {
        let record = TeamRecord::from_sheet(match_id, sheet);

        let mut teams = self.store.get(match_id)?;
        teams.push(record.clone());
        self.store.put(match_id, teams)?;

        info!("Saved team {} for match {}", record.id, match_id);
        Ok(record)
    }

    /// All saved lineups for a match.
    pub fn list(&self, match_id: &str) -> Result<Vec<TeamRecord>> {
        self.store.get(match_id)
    }

    /// One saved lineup, if present.
    pub fn find(&self, match_id: &str, id: Uuid) -> Result<Option<TeamRecord>> {
        Ok(self.store.get(match_id)?.into_iter().find(|t| t.id == id))
    }

    /// Replace the record matching `id`, keeping its id and match while
    /// restamping `created_at` — a re-save is a fresh save of the edited
    /// lineup. Reports not-found if the id is absent.
    pub fn update(&mut self, match_id: &str, id: Uuid, sheet: TeamSheet) -> Result<TeamRecord> {
        let mut teams = self.store.get(match_id)?;

        let slot = teams.iter_mut().find(|t| t.id == id).ok_or_else(|| {
            StoreError::TeamNotFound { match_id: match_id.to_string(), id }
        })?;

        let mut record = TeamRecord::from_sheet(match_id, sheet);
        record.id = id;
        *slot = record.clone();
        self.store.put(match_id, teams)?;

        info!("Updated team {} for match {}", id, match_id);
        Ok(record)
    }

    /// Remove the record matching `id`. Removing an id that was never there
    /// (or was already deleted) succeeds silently.
    pub fn delete(&mut self, match_id: &str, id: Uuid) -> Result<()> {
        let mut teams = self.store.get(match_id)?;
        teams.retain(|t| t.id != id);
        self.store.put(match_id, teams)?;

        info!("Deleted team {} for match {}", id, match_id);
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
