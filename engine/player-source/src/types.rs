use crate::role::{normalize_role, RoleTag};
use serde::{Deserialize, Serialize};

/// A player as the engine sees it, after ingestion has resolved all of the
/// upstream field-name variants into one strict shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier; equality between players is identity on this field
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text role label exactly as the feed sent it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_role: Option<String>,
    /// Canonical role derived from `raw_role` at ingestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleTag>,
    /// Real-world team name
    #[serde(default)]
    pub team: String,
    /// Credit cost against the 100-unit lineup budget
    #[serde(default)]
    pub credits: f64,
    /// Accumulated fantasy points, informational only
    #[serde(default)]
    pub points: f64,
}

impl Player {
    /// Build a player directly, normalizing the role label on the way in.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role_label: impl Into<String>,
        team: impl Into<String>,
        credits: f64,
    ) -> Self {
        let raw_role = role_label.into();
        let role = normalize_role(&raw_role);
        Self {
            id: id.into(),
            name: name.into(),
            raw_role: Some(raw_role),
            role,
            team: team.into(),
            credits,
            points: 0.0,
        }
    }

    /// Identity comparison; structural equality is deliberately not used for
    /// roster membership.
    pub fn same_id(&self, other: &Player) -> bool {
        self.id == other.id
    }
}

/// An upcoming match, ingested with the same synonymous-key treatment as
/// players. The match id namespaces saved lineups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub id: String,
    pub team_a: String,
    pub team_b: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_a_short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_b_short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Raw upstream date string; the engine does not interpret it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[test]
    fn new_normalizes_the_role_label() {
        let p = Player::new("p1", "R. Sharma", "batsman", "India", 9.5);
        assert_eq!(p.role, Some(RoleTag::Canonical(Role::Batsman)));
        assert_eq!(p.raw_role.as_deref(), Some("batsman"));
    }

    #[test]
    fn identity_ignores_everything_but_id() {
        let a = Player::new("7", "A", "bat", "X", 8.0);
        let mut b = Player::new("7", "B", "bowl", "Y", 9.0);
        assert!(a.same_id(&b));
        b.id = "8".to_string();
        assert!(!a.same_id(&b));
    }

    #[test]
    fn role_tag_serializes_as_a_plain_string() {
        let p = Player::new("p1", "K. Rahul", "WK", "India", 9.0);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["role"], "Wicket Keeper");

        let other = Player::new("p2", "Coach", "Mentor", "India", 0.0);
        let json = serde_json::to_value(&other).unwrap();
        assert_eq!(json["role"], "Mentor");
    }
}
