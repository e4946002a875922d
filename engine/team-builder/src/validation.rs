//! Roster validation against the league constraints.
//!
//! Pure functions, recomputed on every call; with eleven players there is
//! nothing worth caching. Error strings and their order are part of the
//! contract — they drive the selection screen verbatim.

use player_source::{Player, Role, RoleTag};
use serde::{Deserialize, Serialize};

/// A finished roster holds exactly this many players.
pub const ROSTER_SIZE: usize = 11;
/// Credit budget for the whole lineup.
pub const MAX_TOTAL_CREDITS: f64 = 100.0;
/// Cap on players drawn from one real-world team.
pub const MAX_FROM_ONE_TEAM: u32 = 7;

/// Allowed count range per canonical role.
fn quota(role: Role) -> (u32, u32) {
    match role {
        Role::Batsman => (3, 7),
        Role::WicketKeeper => (1, 5),
        Role::AllRounder => (0, 4),
        Role::Bowler => (3, 7),
    }
}

/// Players per canonical role. Players whose label normalized to an "Other"
/// bucket (or who carry no label at all) are counted in none of the four.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub batsmen: u32,
    pub wicket_keepers: u32,
    pub all_rounders: u32,
    pub bowlers: u32,
}

impl RoleCounts {
    pub fn count(&self, role: Role) -> u32 {
        match role {
            Role::Batsman => self.batsmen,
            Role::WicketKeeper => self.wicket_keepers,
            Role::AllRounder => self.all_rounders,
            Role::Bowler => self.bowlers,
        }
    }

    fn bump(&mut self, role: Role) {
        match role {
            Role::Batsman => self.batsmen += 1,
            Role::WicketKeeper => self.wicket_keepers += 1,
            Role::AllRounder => self.all_rounders += 1,
            Role::Bowler => self.bowlers += 1,
        }
    }
}

/// Outcome of validating a roster. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Itemized reasons, in display order
    pub errors: Vec<String>,
    pub role_counts: RoleCounts,
    pub total_credits: f64,
    /// Players per real-world team, in the order teams first appear
    pub team_counts: Vec<(String, u32)>,
}

/// Sum of the roster's credit costs.
pub fn total_credits(players: &[Player]) -> f64 {
    players.iter().map(|p| p.credits).sum()
}

/// Count the roster by canonical role.
pub fn role_counts(players: &[Player]) -> RoleCounts {
    let mut counts = RoleCounts::default();
    for player in players {
        if let Some(role) = player.role.as_ref().and_then(RoleTag::canonical) {
            counts.bump(role);
        }
    }
    counts
}

/// Count the roster by real-world team, preserving first-encounter order.
pub fn team_counts(players: &[Player]) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    for player in players {
        match counts.iter_mut().find(|(team, _)| *team == player.team) {
            Some((_, count)) => *count += 1,
            None => counts.push((player.team.clone(), 1)),
        }
    }
    counts
}

/// Validate a roster.
///
/// A wrong-sized roster short-circuits with its single error and zeroed
/// metrics; that early exit is contractual, not an optimization. Every other
/// check runs independently and appends its own error line. Order: size →
/// credits → roles (fixed order) → per-team overflows (first-encounter
/// order).
pub fn validate(players: &[Player]) -> ValidationReport {
    let mut errors = Vec::new();

    if players.len() != ROSTER_SIZE {
        errors.push(format!(
            "You must select exactly 11 players. Currently selected: {}",
            players.len()
        ));
        return ValidationReport {
            is_valid: false,
            errors,
            role_counts: RoleCounts::default(),
            total_credits: 0.0,
            team_counts: Vec::new(),
        };
    }

    let total_credits = total_credits(players);
    if total_credits > MAX_TOTAL_CREDITS {
        errors.push(format!("Total credits exceed 100. Current total: {}", total_credits));
    }

    let role_counts = role_counts(players);
    for role in Role::ALL {
        let (min, max) = quota(role);
        let count = role_counts.count(role);
        if count < min || count > max {
            errors.push(format!(
                "{} count must be between {}-{}. Current: {}",
                role, min, max, count
            ));
        }
    }

    let team_counts = team_counts(players);
    for (team, count) in &team_counts {
        if *count > MAX_FROM_ONE_TEAM {
            errors.push(format!(
                "Maximum 7 players allowed from one team. {} has {} players",
                team, count
            ));
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        role_counts,
        total_credits,
        team_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32, role: &str, team: &str, credits: f64) -> Player {
        Player::new(id.to_string(), format!("Player {id}"), role, team, credits)
    }

    /// 4 batsmen, 1 keeper, 2 all-rounders, 4 bowlers; exactly 100.0
    /// credits; 7/4 split across two teams.
    fn balanced_eleven() -> Vec<Player> {
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
                players.push(player(id, role, team, 9.0));
            }
        }
        players[0].credits = 10.0;
        players
    }

    #[test]
    fn balanced_eleven_is_valid() {
        let report = validate(&balanced_eleven());
        assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
        assert!(report.errors.is_empty());
        assert_eq!(
            report.role_counts,
            RoleCounts { batsmen: 4, wicket_keepers: 1, all_rounders: 2, bowlers: 4 }
        );
    }

    #[test]
    fn wrong_size_short_circuits_with_one_error() {
        for size in [0, 5, 10] {
            let players: Vec<Player> =
                (0..size).map(|i| player(i, "Batsman", "India", 50.0)).collect();
            let report = validate(&players);
            assert!(!report.is_valid);
            assert_eq!(report.errors.len(), 1);
            assert_eq!(
                report.errors[0],
                format!("You must select exactly 11 players. Currently selected: {size}")
            );
            // metrics deliberately left empty on the early exit
            assert_eq!(report.total_credits, 0.0);
            assert_eq!(report.role_counts, RoleCounts::default());
            assert!(report.team_counts.is_empty());
        }
    }

    #[test]
    fn over_budget_is_reported_with_the_total() {
        let mut players = balanced_eleven();
        for p in &mut players {
            p.credits = 10.0;
        }
        players[0].credits = 10.5;
        let report = validate(&players);
        assert!(!report.is_valid);
        assert_eq!(report.errors[0], "Total credits exceed 100. Current total: 110.5");
    }

    #[test]
    fn exactly_100_credits_is_within_budget() {
        let report = validate(&balanced_eleven());
        assert_eq!(report.total_credits, 100.0);
        assert!(report.errors.iter().all(|e| !e.starts_with("Total credits")));
    }

    #[test]
    fn role_quota_errors_carry_counts_in_fixed_order() {
        // all eleven are bowlers: batsman low, keeper low, bowler high
        let players: Vec<Player> =
            (0..11).map(|i| player(i, "Bowler", if i < 6 { "A" } else { "B" }, 8.0)).collect();
        let report = validate(&players);
        assert_eq!(
            report.errors,
            vec![
                "Batsman count must be between 3-7. Current: 0",
                "Wicket Keeper count must be between 1-5. Current: 0",
                "Bowler count must be between 3-7. Current: 11",
            ]
        );
    }

    #[test]
    fn unrecognized_roles_count_toward_no_quota() {
        let mut players = balanced_eleven();
        // swap one bowler's label for something unmappable
        players[10] = player(99, "Net Bowling Coach", "Australia", players[10].credits);
        let report = validate(&players);
        assert_eq!(report.role_counts.bowlers, 3);
        // bowler quota still satisfied at 3, so the roster stays valid
        assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn team_overflow_names_the_team_and_count() {
        let players: Vec<Player> = (0..11)
            .map(|i| {
                let (role, team) = match i {
                    0..=2 => ("Batsman", "India"),
                    3 => ("WK", "India"),
                    4..=7 => ("Bowler", "India"),
                    _ => ("Batsman", "Australia"),
                };
                player(i, role, team, 8.0)
            })
            .collect();
        let report = validate(&players);
        let overflow: Vec<&String> =
            report.errors.iter().filter(|e| e.starts_with("Maximum 7")).collect();
        assert_eq!(overflow.len(), 1);
        assert_eq!(overflow[0], "Maximum 7 players allowed from one team. India has 8 players");
    }

    #[test]
    fn team_counts_keep_first_encounter_order() {
        let players = balanced_eleven();
        let counts = team_counts(&players);
        assert_eq!(counts, vec![("India".to_string(), 7), ("Australia".to_string(), 4)]);
    }

    #[test]
    fn fractional_totals_format_like_the_display_layer_expects() {
        let mut players = balanced_eleven();
        for p in &mut players {
            p.credits = 9.25;
        }
        let report = validate(&players);
        assert_eq!(report.errors[0], "Total credits exceed 100. Current total: 101.75");
    }
}
