//! File-backed store: one pretty-printed JSON document per match

use crate::backend::TeamStore;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::types::TeamRecord;
use std::fs;
use tracing::{debug, info};

/// Local filesystem store. Each match's teams live in
/// `{data_dir}/teams_{match_id}.json`; a missing file reads as an empty
/// list.
#[derive(Debug, Clone)]
pub struct LocalTeamStore {
    config: StoreConfig,
}

impl LocalTeamStore {
    /// Open a store, creating the data directory if needed.
    pub fn new(config: StoreConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;
        info!("Team store ready at: {:?}", config.data_dir);
        Ok(Self { config })
    }

    pub fn with_default_config() -> Result<Self> {
        Self::new(StoreConfig::default())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl TeamStore for LocalTeamStore {
    fn get(&self, match_id: &str) -> Result<Vec<TeamRecord>> {
        let path = self.config.match_file(match_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        let teams = serde_json::from_str(&content)?;
        Ok(teams)
    }

    fn put(&mut self, match_id: &str, teams: Vec<TeamRecord>) -> Result<()> {
        let path = self.config.match_file(match_id);
        let content = serde_json::to_string_pretty(&teams)?;
        fs::write(&path, content)?;
        debug!("Wrote {} teams for match {} to {:?}", teams.len(), match_id, path);
        Ok(())
    }
}
