//! Captain and vice-captain assignment with mutual exclusion.

use crate::error::{BuildError, Result};
use player_source::Player;

/// Captain/vice-captain designation for one roster. At most one of each;
/// whenever both are set they are different players (by id). The designation
/// is recorded only — score multipliers are outside the engine.
#[derive(Debug, Clone, Default)]
pub struct Captaincy {
    captain: Option<Player>,
    vice_captain: Option<Player>,
}

impl Captaincy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the captain, or clear the slot with `None`.
    ///
    /// Fails without mutating when the player currently holds the
    /// vice-captaincy; the caller decides how to surface the conflict.
    pub fn set_captain(&mut self, player: Option<Player>) -> Result<()> {
        if let Some(player) = &player {
            if self.vice_captain.as_ref().is_some_and(|vc| vc.same_id(player)) {
                return Err(BuildError::CaptaincyConflict);
            }
        }
        self.captain = player;
        Ok(())
    }

    /// Mirror of [`set_captain`](Self::set_captain) against the current captain.
    pub fn set_vice_captain(&mut self, player: Option<Player>) -> Result<()> {
        if let Some(player) = &player {
            if self.captain.as_ref().is_some_and(|c| c.same_id(player)) {
                return Err(BuildError::CaptaincyConflict);
            }
        }
        self.vice_captain = player;
        Ok(())
    }

    pub fn captain(&self) -> Option<&Player> {
        self.captain.as_ref()
    }

    pub fn vice_captain(&self) -> Option<&Player> {
        self.vice_captain.as_ref()
    }

    /// Both roles assigned.
    pub fn is_complete(&self) -> bool {
        self.captain.is_some() && self.vice_captain.is_some()
    }

    pub fn clear(&mut self) {
        self.captain = None;
        self.vice_captain = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str) -> Player {
        Player::new(id, format!("Player {id}"), "Batsman", "India", 8.0)
    }

    #[test]
    fn mutual_exclusion_in_both_orders() {
        let mut captaincy = Captaincy::new();
        captaincy.set_captain(Some(player("x"))).unwrap();
        assert_eq!(
            captaincy.set_vice_captain(Some(player("x"))),
            Err(BuildError::CaptaincyConflict)
        );
        assert!(captaincy.vice_captain().is_none());

        let mut captaincy = Captaincy::new();
        captaincy.set_vice_captain(Some(player("x"))).unwrap();
        assert_eq!(
            captaincy.set_captain(Some(player("x"))),
            Err(BuildError::CaptaincyConflict)
        );
        assert!(captaincy.captain().is_none());
    }

    #[test]
    fn reassignment_overwrites() {
        let mut captaincy = Captaincy::new();
        captaincy.set_captain(Some(player("a"))).unwrap();
        captaincy.set_captain(Some(player("b"))).unwrap();
        assert_eq!(captaincy.captain().map(|p| p.id.as_str()), Some("b"));
    }

    #[test]
    fn none_clears_a_slot() {
        let mut captaincy = Captaincy::new();
        captaincy.set_captain(Some(player("a"))).unwrap();
        captaincy.set_vice_captain(Some(player("b"))).unwrap();
        captaincy.set_captain(None).unwrap();
        assert!(captaincy.captain().is_none());
        assert!(!captaincy.is_complete());

        // clearing one slot leaves the other untouched
        assert_eq!(captaincy.vice_captain().map(|p| p.id.as_str()), Some("b"));
    }

    #[test]
    fn failed_assignment_does_not_mutate() {
        let mut captaincy = Captaincy::new();
        captaincy.set_captain(Some(player("a"))).unwrap();
        captaincy.set_vice_captain(Some(player("b"))).unwrap();
        assert!(captaincy.set_captain(Some(player("b"))).is_err());
        assert_eq!(captaincy.captain().map(|p| p.id.as_str()), Some("a"));
    }
}
