//! End-to-end exercise of the lineup engine: ingest a deliberately messy
//! player payload, build and validate a roster, assign captaincy, then run
//! the full save/edit/delete lifecycle against both store backends.

use anyhow::{bail, Result};
use player_source::{matches_from_value, PlayerFilter, PlayerPool, Role};
use team_builder::{BuildError, TeamBuilder, ToggleOutcome};
use team_store::{InMemoryTeamStore, LocalTeamStore, StoreConfig, TeamService, TeamStore};

const MATCH_ID: &str = "910";

/// A payload the way real feeds send them: envelope under `players`, field
/// names disagreeing record to record.
fn sample_payload() -> serde_json::Value {
    let mut players = Vec::new();
    let squads: [(&str, &[(&str, &str, f64)]); 2] = [
        (
            "India",
            &[
                ("Rohit Sharma", "Batsman", 10.0),
                ("Shubman Gill", "batsman", 9.0),
                ("Virat Kohli", "BAT", 9.5),
                ("Shreyas Iyer", "Batsman", 8.5),
                ("KL Rahul", "WK", 9.0),
                ("Ravindra Jadeja", "All Rounder", 9.0),
                ("Axar Patel", "all-rounder", 8.0),
                ("Jasprit Bumrah", "Bowler", 9.5),
                ("Mohammed Siraj", "bowler", 8.5),
                ("Kuldeep Yadav", "Bowler", 8.0),
            ],
        ),
        (
            "Australia",
            &[
                ("Travis Head", "Batsman", 9.5),
                ("Steve Smith", "Batsman", 9.0),
                ("Alex Carey", "Wicketkeeper", 8.5),
                ("Cameron Green", "AR", 8.5),
                ("Pat Cummins", "Bowler", 9.5),
                ("Mitchell Starc", "Bowler", 9.0),
                ("Adam Zampa", "bowl", 8.0),
            ],
        ),
    ];

    for (team, members) in squads {
        for (index, (name, role, credits)) in members.iter().enumerate() {
            // rotate through the id/name/credit spellings feeds actually use
            let player = match index % 3 {
                0 => serde_json::json!({
                    "id": format!("{team}-{index}"),
                    "Name": name, "Role": role, "team_name": team,
                    "event_player_credit": credits,
                }),
                1 => serde_json::json!({
                    "Player_Id": format!("{team}-{index}"),
                    "name": name, "role": role, "Team": team,
                    "Credits": credits,
                }),
                _ => serde_json::json!({
                    "player_id": format!("{team}-{index}"),
                    "Name": name, "Role": role, "team": team,
                    "credits": credits,
                }),
            };
            players.push(player);
        }
    }

    serde_json::json!({ "players": players })
}

fn run_lifecycle<S: TeamStore>(label: &str, store: S, pool: &PlayerPool) -> Result<()> {
    println!("\n=== Lifecycle against the {label} store ===");
    let mut service = TeamService::new(store);

    // A legal eleven: 5 batsmen, 1 keeper, 2 all-rounders, 3 bowlers;
    // 7 from India, 4 from Australia; 98.5 credits.
    let lineup = [
        "Rohit Sharma",
        "Shubman Gill",
        "Shreyas Iyer",
        "KL Rahul",
        "Ravindra Jadeja",
        "Jasprit Bumrah",
        "Mohammed Siraj",
        "Travis Head",
        "Steve Smith",
        "Cameron Green",
        "Adam Zampa",
    ];

    let mut builder = TeamBuilder::new(MATCH_ID);
    for name in lineup {
        let hits = pool.search(name);
        if hits.len() != 1 {
            bail!("expected exactly one player named {name}");
        }
        if builder.toggle(hits[0]) != ToggleOutcome::Added {
            bail!("{name} should have been added");
        }
    }

    let report = builder.validation();
    if !report.is_valid {
        bail!("roster unexpectedly invalid: {:?}", report.errors);
    }
    println!(
        "✅ Valid roster: {} credits, {}/{}/{}/{} roles",
        report.total_credits,
        report.role_counts.batsmen,
        report.role_counts.wicket_keepers,
        report.role_counts.all_rounders,
        report.role_counts.bowlers,
    );

    // A twelfth player must bounce off the full roster.
    let extra = pool.search("Virat Kohli");
    if builder.toggle(extra[0]) != ToggleOutcome::RosterFull {
        bail!("twelfth player should have been rejected");
    }

    // Captaincy: conflict rejected, then a proper pair.
    let captain = pool.search("Rohit Sharma")[0];
    let vice = pool.search("Jasprit Bumrah")[0];
    builder.set_captain(Some(captain))?;
    match builder.set_vice_captain(Some(captain)) {
        Err(BuildError::CaptaincyConflict) => println!("✅ Captaincy conflict rejected"),
        other => bail!("expected a captaincy conflict, got {other:?}"),
    }
    builder.set_vice_captain(Some(vice))?;

    // Save → list → edit → update → delete.
    let sheet = builder.finish()?;
    let created = service.create(MATCH_ID, sheet)?;
    println!("✅ Created team {}", created.id);

    let teams = service.list(MATCH_ID)?;
    if teams.len() != 1 {
        bail!("expected one saved team, found {}", teams.len());
    }

    // Edit flow: promote the vice-captain, hand the armband to the keeper.
    let mut editing = TeamBuilder::resume(
        MATCH_ID,
        created.players.clone(),
        Some(created.captain.clone()),
        Some(created.vice_captain.clone()),
    );
    let keeper = pool.search("KL Rahul")[0];
    editing.set_vice_captain(Some(keeper))?;
    editing.set_captain(Some(vice))?;
    let updated = service.update(MATCH_ID, created.id, editing.finish()?)?;
    println!("✅ Updated team, captain is now {}", updated.captain.name);

    let teams = service.list(MATCH_ID)?;
    if teams.len() != 1 || teams[0].captain.name != "Jasprit Bumrah" {
        bail!("update was not reflected exactly once");
    }

    service.delete(MATCH_ID, created.id)?;
    if !service.list(MATCH_ID)?.is_empty() {
        bail!("delete left the team behind");
    }
    println!("✅ Deleted team");

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("🏏 Lineup engine integration test");

    // Match ingestion: the cricket envelope with its own field spellings.
    let match_payload = serde_json::json!({
        "matches": {
            "cricket": [
                { "Match_Id": 910, "t1_name": "India", "t2_name": "Australia",
                  "match_date": "2026-08-09T14:30:00Z" }
            ]
        }
    });
    let matches = matches_from_value(&match_payload)?;
    if matches.len() != 1 || matches[0].id != MATCH_ID {
        bail!("unexpected match ingestion result: {matches:?}");
    }
    println!("✅ Ingested match {} ({} v {})", matches[0].id, matches[0].team_a, matches[0].team_b);

    // Ingestion: messy payload in, strict players out.
    let pool = PlayerPool::from_value(&sample_payload())?;
    println!("✅ Ingested {} players", pool.len());
    if pool.len() != 17 {
        bail!("expected 17 players, got {}", pool.len());
    }
    if pool.team_names() != ["Australia", "India"] {
        bail!("unexpected team names: {:?}", pool.team_names());
    }

    // Filtering mirrors the selection screen's sidebar.
    let bowlers = pool.filter(&PlayerFilter { role: Some(Role::Bowler), ..Default::default() });
    println!("✅ Filter found {} bowlers", bowlers.len());
    if bowlers.len() != 6 {
        bail!("expected 6 bowlers, got {}", bowlers.len());
    }

    run_lifecycle("in-memory", InMemoryTeamStore::new(), &pool)?;

    let dir = tempfile::TempDir::new()?;
    run_lifecycle("local", LocalTeamStore::new(StoreConfig::new(dir.path()))?, &pool)?;

    println!("\n🎉 All integration checks passed");
    Ok(())
}
