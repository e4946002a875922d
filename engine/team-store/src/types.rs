use chrono::{DateTime, Utc};
use player_source::Player;
use serde::{Deserialize, Serialize};
use team_builder::TeamSheet;
use uuid::Uuid;

/// A persisted, finalized lineup: exactly eleven players plus both captaincy
/// designations, owned by one match context. Multiple records may exist per
/// match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: Uuid,
    pub match_id: String,
    pub players: Vec<Player>,
    pub captain: Player,
    pub vice_captain: Player,
    pub created_at: DateTime<Utc>,
}

impl TeamRecord {
    /// Mint a record from a finished sheet: fresh random id (unique by
    /// construction) and a current timestamp.
    pub fn from_sheet(match_id: impl Into<String>, sheet: TeamSheet) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_id: match_id.into(),
            players: sheet.players,
            captain: sheet.captain,
            vice_captain: sheet.vice_captain,
            created_at: Utc::now(),
        }
    }

    /// Back to a sheet, for resuming an editing session.
    pub fn to_sheet(&self) -> TeamSheet {
        TeamSheet {
            players: self.players.clone(),
            captain: self.captain.clone(),
            vice_captain: self.vice_captain.clone(),
        }
    }
}
