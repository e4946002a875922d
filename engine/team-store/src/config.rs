//! Configuration for the team store

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the local, file-backed store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding one JSON document per match
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    /// File path for one match's saved teams. The match id is opaque
    /// upstream text, so it is reduced to filesystem-safe characters here.
    pub fn match_file(&self, match_id: &str) -> PathBuf {
        let safe: String = match_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.data_dir.join(format!("teams_{safe}.json"))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("./data/teams") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_file_sanitizes_opaque_ids() {
        let config = StoreConfig::new("/tmp/teams");
        assert_eq!(
            config.match_file("match/910:IND v AUS"),
            PathBuf::from("/tmp/teams/teams_match_910_IND_v_AUS.json")
        );
    }

    #[test]
    fn plain_ids_pass_through() {
        let config = StoreConfig::new("data");
        assert_eq!(config.match_file("910"), PathBuf::from("data/teams_910.json"));
    }
}
