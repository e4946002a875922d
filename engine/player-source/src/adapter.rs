//! Ingestion adapter for loosely-structured upstream payloads
//!
//! Upstream feeds are JSON with no agreed schema: the player list may be a
//! bare array, live under `players` or `Players`, or sit one level deeper
//! inside an object keyed by match. Field names vary per feed. All of that
//! tolerance lives here, executed once per payload; nothing past this module
//! ever branches on a field-name variant.

use crate::error::{Result, SourceError};
use crate::role::normalize_role;
use crate::types::{MatchInfo, Player};
use serde_json::{Map, Value};
use tracing::{info, warn};

const PLAYER_ID_KEYS: &[&str] = &["id", "Player_Id", "player_id"];
const PLAYER_NAME_KEYS: &[&str] = &["Name", "name"];
const PLAYER_ROLE_KEYS: &[&str] = &["Role", "role"];
const PLAYER_TEAM_KEYS: &[&str] = &["team_name", "Team", "team"];
const PLAYER_CREDIT_KEYS: &[&str] = &["event_player_credit", "Credits", "credits"];
const PLAYER_POINT_KEYS: &[&str] = &["event_total_points", "points"];

const MATCH_ID_KEYS: &[&str] = &["id", "Match_Id", "match_id", "MatchId"];
const MATCH_TEAM_A_KEYS: &[&str] = &["t1_name", "Team1", "team1", "Team_A"];
const MATCH_TEAM_B_KEYS: &[&str] = &["t2_name", "Team2", "team2", "Team_B"];
const MATCH_TEAM_A_SHORT_KEYS: &[&str] = &["t1_short_name", "Team1_Short"];
const MATCH_TEAM_B_SHORT_KEYS: &[&str] = &["t2_short_name", "Team2_Short"];
const MATCH_NAME_KEYS: &[&str] = &["match_name", "Match_Name"];
const MATCH_EVENT_KEYS: &[&str] = &["event_name", "Event_Name"];
const MATCH_DATE_KEYS: &[&str] = &["match_date", "Date", "date", "Match_Date"];

/// First present of the synonymous keys, as text. Numeric ids are rendered
/// as strings so both id spellings end up comparable.
fn text_field(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        match record.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// First present of the synonymous keys, as a number. Numeric strings are
/// accepted; some feeds quote their credit column.
fn numeric_field(record: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    for key in keys {
        match record.get(*key) {
            Some(Value::Number(n)) => return n.as_f64(),
            Some(Value::String(s)) => {
                if let Ok(value) = s.trim().parse::<f64>() {
                    return Some(value);
                }
            }
            _ => {}
        }
    }
    None
}

/// Locate the player array inside whatever envelope the feed used.
fn player_list(payload: &Value) -> Result<&[Value]> {
    if let Some(list) = payload.as_array() {
        return Ok(list);
    }
    if let Some(obj) = payload.as_object() {
        for key in ["players", "Players"] {
            match obj.get(key) {
                Some(Value::Array(list)) => return Ok(list),
                // one level deeper: an object keyed by match, first value wins
                Some(Value::Object(inner)) => {
                    return Ok(inner
                        .values()
                        .next()
                        .and_then(Value::as_array)
                        .map(Vec::as_slice)
                        .unwrap_or(&[]));
                }
                _ => {}
            }
        }
    }
    Err(SourceError::MalformedPayload(
        "expected a player array or an object with a `players` field",
    ))
}

/// Locate the match array; cricket feeds nest it under `matches.cricket`.
fn match_list(payload: &Value) -> Result<&[Value]> {
    if let Some(list) = payload.as_array() {
        return Ok(list);
    }
    if let Some(obj) = payload.as_object() {
        for key in ["matches", "Matches"] {
            if let Some(inner) = obj.get(key) {
                let Some(inner_obj) = inner.as_object() else {
                    return Ok(&[]);
                };
                for sport in ["cricket", "Cricket"] {
                    if let Some(Value::Array(list)) = inner_obj.get(sport) {
                        return Ok(list);
                    }
                }
                return Ok(inner_obj
                    .values()
                    .find_map(Value::as_array)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]));
            }
        }
    }
    Err(SourceError::MalformedPayload(
        "expected a match array or an object with a `matches` field",
    ))
}

fn player_from_record(record: &Value, index: usize) -> Option<Player> {
    let obj = record.as_object()?;

    // positional index as the identity fallback when every id key is absent
    let id = text_field(obj, PLAYER_ID_KEYS).unwrap_or_else(|| index.to_string());
    let raw_role = text_field(obj, PLAYER_ROLE_KEYS);
    let role = raw_role.as_deref().and_then(normalize_role);

    Some(Player {
        id,
        name: text_field(obj, PLAYER_NAME_KEYS).unwrap_or_else(|| "Unknown".to_string()),
        raw_role,
        role,
        team: text_field(obj, PLAYER_TEAM_KEYS).unwrap_or_default(),
        credits: numeric_field(obj, PLAYER_CREDIT_KEYS).unwrap_or(0.0),
        points: numeric_field(obj, PLAYER_POINT_KEYS).unwrap_or(0.0),
    })
}

fn match_from_record(record: &Value, index: usize) -> Option<MatchInfo> {
    let obj = record.as_object()?;

    Some(MatchInfo {
        id: text_field(obj, MATCH_ID_KEYS).unwrap_or_else(|| index.to_string()),
        team_a: text_field(obj, MATCH_TEAM_A_KEYS).unwrap_or_else(|| "Team A".to_string()),
        team_b: text_field(obj, MATCH_TEAM_B_KEYS).unwrap_or_else(|| "Team B".to_string()),
        team_a_short: text_field(obj, MATCH_TEAM_A_SHORT_KEYS),
        team_b_short: text_field(obj, MATCH_TEAM_B_SHORT_KEYS),
        name: text_field(obj, MATCH_NAME_KEYS),
        event: text_field(obj, MATCH_EVENT_KEYS),
        start_date: text_field(obj, MATCH_DATE_KEYS),
    })
}

/// Ingest a player payload into strict [`Player`] records.
///
/// Rejects payloads with no recognizable player list; skips individual
/// records that are not objects.
pub fn players_from_value(payload: &Value) -> Result<Vec<Player>> {
    let records = player_list(payload)?;

    let mut players = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match player_from_record(record, index) {
            Some(player) => players.push(player),
            None => warn!("Skipping non-object player record at index {}", index),
        }
    }

    info!("Ingested {} players", players.len());
    Ok(players)
}

/// Ingest a match payload into [`MatchInfo`] records.
pub fn matches_from_value(payload: &Value) -> Result<Vec<MatchInfo>> {
    let records = match_list(payload)?;

    let mut matches = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match match_from_record(record, index) {
            Some(info) => matches.push(info),
            None => warn!("Skipping non-object match record at index {}", index),
        }
    }

    info!("Ingested {} matches", matches.len());
    Ok(matches)
}
