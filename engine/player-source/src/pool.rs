//! Read-only pool of ingested players with the browse queries the lineup
//! screens need: lookup by id, unique team names, and combined filtering.

use crate::adapter::players_from_value;
use crate::error::Result;
use crate::role::{Role, RoleTag};
use crate::types::Player;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// All players available for one match, after ingestion.
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: Vec<Player>,
}

impl PlayerPool {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Ingest a raw upstream payload.
    pub fn from_value(payload: &Value) -> Result<Self> {
        Ok(Self::new(players_from_value(payload)?))
    }

    pub fn from_json_str(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)?;
        Self::from_value(&value)
    }

    /// Load a player payload from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Loading player data from: {:?}", path.as_ref());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Unique real-world team names, sorted.
    pub fn team_names(&self) -> Vec<String> {
        let mut teams: Vec<String> = Vec::new();
        for player in &self.players {
            if !player.team.is_empty() && !teams.contains(&player.team) {
                teams.push(player.team.clone());
            }
        }
        teams.sort();
        teams
    }

    /// Players matching every criterion of the filter.
    pub fn filter(&self, filter: &PlayerFilter) -> Vec<&Player> {
        self.players.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Case-insensitive name substring search.
    pub fn search(&self, query: &str) -> Vec<&Player> {
        let query_lower = query.to_lowercase();
        self.players
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query_lower))
            .collect()
    }
}

/// Combined filter over a pool; the default matches every player.
#[derive(Debug, Clone)]
pub struct PlayerFilter {
    /// Keep only players with this canonical role
    pub role: Option<Role>,
    /// Keep only players from this real-world team
    pub team: Option<String>,
    /// Inclusive credit range
    pub min_credits: f64,
    pub max_credits: f64,
    /// Case-insensitive name substring
    pub query: Option<String>,
}

impl Default for PlayerFilter {
    fn default() -> Self {
        Self { role: None, team: None, min_credits: 0.0, max_credits: 100.0, query: None }
    }
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        if let Some(role) = self.role {
            if player.role != Some(RoleTag::Canonical(role)) {
                return false;
            }
        }
        if let Some(team) = &self.team {
            if &player.team != team {
                return false;
            }
        }
        if player.credits < self.min_credits || player.credits > self.max_credits {
            return false;
        }
        if let Some(query) = &self.query {
            if !player.name.to_lowercase().contains(&query.to_lowercase()) {
                return false;
            }
        }
        true
    }
}
