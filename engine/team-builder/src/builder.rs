//! The per-match editing session.
//!
//! One [`TeamBuilder`] owns the whole in-progress state for one match:
//! roster, captaincy, and the continuously-recomputed validation the
//! selection screen renders. Nothing here is shared or global; create one
//! when the user starts editing a lineup for a match and drop it when they
//! leave.

use crate::captaincy::Captaincy;
use crate::error::{BuildError, Result};
use crate::selection::{Selection, ToggleOutcome};
use crate::validation::{role_counts, total_credits, validate, RoleCounts, ValidationReport};
use player_source::Player;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A finished, validated lineup ready to persist: an eleven-player snapshot
/// plus both captaincy designations. Produced by [`TeamBuilder::finish`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSheet {
    pub players: Vec<Player>,
    pub captain: Player,
    pub vice_captain: Player,
}

/// Editing session for one match's lineup.
#[derive(Debug, Clone)]
pub struct TeamBuilder {
    match_id: String,
    selection: Selection,
    captaincy: Captaincy,
}

impl TeamBuilder {
    /// Start an empty session for a match.
    pub fn new(match_id: impl Into<String>) -> Self {
        Self { match_id: match_id.into(), selection: Selection::new(), captaincy: Captaincy::new() }
    }

    /// Resume a session from a previously-saved lineup (the edit flow). The
    /// saved state was valid when stored, so the roster cap is not re-checked
    /// and a saved captain/vice pair cannot conflict.
    pub fn resume(
        match_id: impl Into<String>,
        players: Vec<Player>,
        captain: Option<Player>,
        vice_captain: Option<Player>,
    ) -> Self {
        let mut builder = Self::new(match_id);
        builder.selection.replace_all(players);
        let _ = builder.captaincy.set_captain(captain);
        let _ = builder.captaincy.set_vice_captain(vice_captain);
        builder
    }

    pub fn match_id(&self) -> &str {
        &self.match_id
    }

    /// Flip a player's roster membership. Removing a player also vacates any
    /// captaincy slot they held, so the session never carries a designation
    /// for a non-member.
    pub fn toggle(&mut self, player: &Player) -> ToggleOutcome {
        let outcome = self.selection.toggle(player);

        if outcome == ToggleOutcome::Removed {
            if self.captaincy.captain().is_some_and(|c| c.same_id(player)) {
                debug!("Removed player {} held the captaincy, clearing it", player.id);
                let _ = self.captaincy.set_captain(None);
            }
            if self.captaincy.vice_captain().is_some_and(|vc| vc.same_id(player)) {
                debug!("Removed player {} held the vice-captaincy, clearing it", player.id);
                let _ = self.captaincy.set_vice_captain(None);
            }
        }

        outcome
    }

    pub fn is_selected(&self, player: &Player) -> bool {
        self.selection.is_selected(player)
    }

    pub fn selected(&self) -> &[Player] {
        self.selection.players()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Current validation verdict; recomputed on every call.
    pub fn validation(&self) -> ValidationReport {
        validate(self.selection.players())
    }

    pub fn role_counts(&self) -> RoleCounts {
        role_counts(self.selection.players())
    }

    pub fn total_credits(&self) -> f64 {
        total_credits(self.selection.players())
    }

    /// Assign or clear the captain. Assignment requires roster membership;
    /// the conflict rule itself lives in [`Captaincy`].
    pub fn set_captain(&mut self, player: Option<&Player>) -> Result<()> {
        if let Some(player) = player {
            if !self.selection.is_selected(player) {
                return Err(BuildError::NotInRoster(player.id.clone()));
            }
        }
        self.captaincy.set_captain(player.cloned())
    }

    /// Mirror of [`set_captain`](Self::set_captain).
    pub fn set_vice_captain(&mut self, player: Option<&Player>) -> Result<()> {
        if let Some(player) = player {
            if !self.selection.is_selected(player) {
                return Err(BuildError::NotInRoster(player.id.clone()));
            }
        }
        self.captaincy.set_vice_captain(player.cloned())
    }

    pub fn captain(&self) -> Option<&Player> {
        self.captaincy.captain()
    }

    pub fn vice_captain(&self) -> Option<&Player> {
        self.captaincy.vice_captain()
    }

    /// The authoritative pre-save gate: a valid roster and both captaincy
    /// roles. On success, returns the snapshot to hand to the store.
    pub fn finish(&self) -> Result<TeamSheet> {
        let report = self.validation();
        if !report.is_valid {
            return Err(BuildError::InvalidRoster { errors: report.errors });
        }

        let captain = self.captaincy.captain().cloned().ok_or(BuildError::MissingCaptain)?;
        let vice_captain =
            self.captaincy.vice_captain().cloned().ok_or(BuildError::MissingViceCaptain)?;

        Ok(TeamSheet { players: self.selection.players().to_vec(), captain, vice_captain })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32, role: &str, team: &str) -> Player {
        Player::new(id.to_string(), format!("Player {id}"), role, team, 9.0)
    }

    /// Eleven players satisfying every constraint.
    fn fill_valid_roster(builder: &mut TeamBuilder) -> Vec<Player> {
        let mut players = Vec::new();
        let mut id = 0;
        for (role, count, team) in [
            ("Batsman", 4, "India"),
            ("WK", 1, "India"),
            ("All Rounder", 2, "India"),
            ("Bowler", 4, "Australia"),
        ] {
            for _ in 0..count {
                id += 1;
                let p = player(id, role, team);
                assert_eq!(builder.toggle(&p), ToggleOutcome::Added);
                players.push(p);
            }
        }
        players
    }

    #[test]
    fn full_flow_produces_a_sheet() {
        let mut builder = TeamBuilder::new("match-910");
        let players = fill_valid_roster(&mut builder);
        assert!(builder.validation().is_valid);

        builder.set_captain(Some(&players[0])).unwrap();
        builder.set_vice_captain(Some(&players[5])).unwrap();

        let sheet = builder.finish().unwrap();
        assert_eq!(sheet.players.len(), 11);
        assert_eq!(sheet.captain.id, players[0].id);
        assert_eq!(sheet.vice_captain.id, players[5].id);
    }

    #[test]
    fn finish_rejects_an_invalid_roster_with_reasons() {
        let mut builder = TeamBuilder::new("m");
        builder.toggle(&player(1, "Batsman", "India"));

        match builder.finish() {
            Err(BuildError::InvalidRoster { errors }) => {
                assert_eq!(
                    errors,
                    vec!["You must select exactly 11 players. Currently selected: 1"]
                );
            }
            other => panic!("expected InvalidRoster, got {other:?}"),
        }
    }

    #[test]
    fn finish_requires_both_captaincy_roles() {
        let mut builder = TeamBuilder::new("m");
        let players = fill_valid_roster(&mut builder);

        assert_eq!(builder.finish(), Err(BuildError::MissingCaptain));

        builder.set_captain(Some(&players[0])).unwrap();
        assert_eq!(builder.finish(), Err(BuildError::MissingViceCaptain));
    }

    #[test]
    fn captaincy_requires_membership() {
        let mut builder = TeamBuilder::new("m");
        fill_valid_roster(&mut builder);

        let outsider = player(99, "Batsman", "India");
        assert_eq!(
            builder.set_captain(Some(&outsider)),
            Err(BuildError::NotInRoster("99".to_string()))
        );
        assert!(builder.captain().is_none());
    }

    #[test]
    fn mutual_exclusion_through_the_session() {
        let mut builder = TeamBuilder::new("m");
        let players = fill_valid_roster(&mut builder);

        builder.set_captain(Some(&players[0])).unwrap();
        assert_eq!(
            builder.set_vice_captain(Some(&players[0])),
            Err(BuildError::CaptaincyConflict)
        );
        assert!(builder.vice_captain().is_none());
    }

    #[test]
    fn removing_a_player_vacates_their_captaincy() {
        let mut builder = TeamBuilder::new("m");
        let players = fill_valid_roster(&mut builder);

        builder.set_captain(Some(&players[0])).unwrap();
        builder.set_vice_captain(Some(&players[1])).unwrap();

        builder.toggle(&players[0]);
        assert!(builder.captain().is_none());
        assert_eq!(builder.vice_captain().map(|p| p.id.as_str()), Some("2"));
    }

    #[test]
    fn resume_restores_a_saved_lineup() {
        let mut original = TeamBuilder::new("m");
        let players = fill_valid_roster(&mut original);
        original.set_captain(Some(&players[0])).unwrap();
        original.set_vice_captain(Some(&players[1])).unwrap();
        let sheet = original.finish().unwrap();

        let resumed = TeamBuilder::resume(
            "m",
            sheet.players.clone(),
            Some(sheet.captain.clone()),
            Some(sheet.vice_captain.clone()),
        );
        assert!(resumed.validation().is_valid);
        assert_eq!(resumed.captain().map(|p| p.id.as_str()), Some("1"));
        assert!(resumed.finish().is_ok());
    }

    #[test]
    fn twelve_toggles_leave_eleven_selected() {
        let mut builder = TeamBuilder::new("m");
        for id in 1..=11 {
            assert_eq!(builder.toggle(&player(id, "Batsman", "India")), ToggleOutcome::Added);
        }
        assert_eq!(
            builder.toggle(&player(12, "Batsman", "India")),
            ToggleOutcome::RosterFull
        );
        assert_eq!(builder.selected_count(), 11);
    }
}
