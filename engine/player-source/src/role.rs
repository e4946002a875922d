//! Canonical playing roles and the free-text label normalizer

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four canonical cricket roles a lineup is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    #[serde(rename = "Wicket Keeper")]
    WicketKeeper,
    #[serde(rename = "All Rounder")]
    AllRounder,
    Bowler,
}

impl Role {
    /// Fixed display/validation order.
    pub const ALL: [Role; 4] = [Role::Batsman, Role::WicketKeeper, Role::AllRounder, Role::Bowler];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::WicketKeeper => "Wicket Keeper",
            Role::AllRounder => "All Rounder",
            Role::Bowler => "Bowler",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of normalizing a raw role label.
///
/// Labels that match no canonical role keep their original text and act as an
/// "Other" bucket for grouping; they count toward no role quota.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleTag {
    Canonical(Role),
    Other(String),
}

impl RoleTag {
    pub fn canonical(&self) -> Option<Role> {
        match self {
            RoleTag::Canonical(role) => Some(*role),
            RoleTag::Other(_) => None,
        }
    }

    /// Display label: the canonical name, or the preserved original text.
    pub fn label(&self) -> &str {
        match self {
            RoleTag::Canonical(role) => role.label(),
            RoleTag::Other(label) => label,
        }
    }
}

/// Map a free-text role label to a canonical role.
///
/// Matching is case-insensitive on the trimmed label and checked in fixed
/// precedence order; the first match wins. An empty label yields `None`; a
/// label that matches nothing is returned unchanged as [`RoleTag::Other`].
/// Pure and deterministic, and idempotent over the four canonical labels.
pub fn normalize_role(label: &str) -> Option<RoleTag> {
    if label.is_empty() {
        return None;
    }

    let lower = label.trim().to_lowercase();

    let role = if lower.contains("batsman") || lower == "bat" {
        Some(Role::Batsman)
    } else if lower.contains("wicket")
        || lower.contains("keeper")
        || lower == "wk"
        || lower == "wicketkeeper"
    {
        Some(Role::WicketKeeper)
    } else if (lower.contains("all") && lower.contains("rounder"))
        || lower == "ar"
        || lower == "allrounder"
    {
        Some(Role::AllRounder)
    } else if lower.contains("bowler") || lower == "bowl" {
        Some(Role::Bowler)
    } else {
        None
    };

    Some(match role {
        Some(role) => RoleTag::Canonical(role),
        None => RoleTag::Other(label.to_string()),
    })
}
