//! In-progress roster: an ordered-by-insertion set of players, unique by id,
//! capped at eleven.

use player_source::Player;
use tracing::debug;

/// What a [`Selection::toggle`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The roster already holds eleven players; the add was rejected and the
    /// roster is unchanged. Callers may surface a "maximum players reached"
    /// notice, but rejection itself is silent.
    RosterFull,
}

/// The in-progress roster for one lineup.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    players: Vec<Player>,
}

impl Selection {
    pub const MAX_PLAYERS: usize = 11;

    pub fn new() -> Self {
        Self { players: Vec::new() }
    }

    /// Flip a player's membership. Members are matched by id, never by
    /// structural equality.
    pub fn toggle(&mut self, player: &Player) -> ToggleOutcome {
        if let Some(index) = self.players.iter().position(|p| p.same_id(player)) {
            self.players.remove(index);
            return ToggleOutcome::Removed;
        }

        if self.players.len() >= Self::MAX_PLAYERS {
            debug!("Roster full, rejecting player {}", player.id);
            return ToggleOutcome::RosterFull;
        }

        self.players.push(player.clone());
        ToggleOutcome::Added
    }

    pub fn is_selected(&self, player: &Player) -> bool {
        self.contains_id(&player.id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// Restore a previously-saved roster for editing. The eleven-cap is not
    /// re-checked here: the caller is restoring state that was valid when it
    /// was saved.
    pub fn replace_all(&mut self, players: Vec<Player>) {
        self.players = players;
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

    pub fn clear(&mut self) {
        self.players.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32) -> Player {
        Player::new(id.to_string(), format!("Player {id}"), "Batsman", "India", 8.0)
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::new();
        assert_eq!(selection.toggle(&player(1)), ToggleOutcome::Added);
        assert!(selection.is_selected(&player(1)));
        assert_eq!(selection.toggle(&player(1)), ToggleOutcome::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn membership_is_by_id_not_structure() {
        let mut selection = Selection::new();
        selection.toggle(&player(1));

        // same id, completely different fields
        let doppelganger = Player::new("1", "Someone Else", "Bowler", "Australia", 9.9);
        assert!(selection.is_selected(&doppelganger));
        assert_eq!(selection.toggle(&doppelganger), ToggleOutcome::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn twelfth_distinct_toggle_is_rejected() {
        let mut selection = Selection::new();
        for id in 1..=11 {
            assert_eq!(selection.toggle(&player(id)), ToggleOutcome::Added);
        }
        assert_eq!(selection.len(), 11);
        assert_eq!(selection.toggle(&player(12)), ToggleOutcome::RosterFull);
        assert_eq!(selection.len(), 11);
        assert!(!selection.is_selected(&player(12)));
    }

    #[test]
    fn toggling_a_member_of_a_full_roster_removes_it() {
        let mut selection = Selection::new();
        for id in 1..=11 {
            selection.toggle(&player(id));
        }
        assert_eq!(selection.toggle(&player(5)), ToggleOutcome::Removed);
        assert_eq!(selection.len(), 10);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut selection = Selection::new();
        for id in [3, 1, 2] {
            selection.toggle(&player(id));
        }
        let ids: Vec<&str> = selection.players().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn replace_all_restores_saved_state() {
        let mut selection = Selection::new();
        selection.toggle(&player(99));
        selection.replace_all((1..=11).map(player).collect());
        assert_eq!(selection.len(), 11);
        assert!(!selection.is_selected(&player(99)));
    }
}
