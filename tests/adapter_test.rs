//! Integration tests for loading and normalizing match files

use club_stats::{
    adapter::{load_matches, parse_matches},
    commands::{load_filtered_matches, resolve_matches_path},
    Competition, EventKind, Role, StatsError, MATCHES_ENV_VAR,
};
use std::io::Write;
use tempfile::NamedTempFile;

const SEASON: &str = r#"{
  "matches": [
    {
      "id": 101, "teamId": 1, "rivalId": "9", "isHome": true,
      "kickoff": "2024-09-14T16:00:00+02:00", "competition": "Copa",
      "matchday": 1, "finished": true,
      "lineup": [
        {"playerId": 7, "role": "field", "number": 10, "position": "DEL", "minutes": "90"},
        {"playerId": 8, "role": "captain", "minutes": 90},
        {"playerId": 12, "role": "bench", "minutes": -5}
      ],
      "events": [
        {"type": "gol", "teamId": 1, "playerId": 7, "minute": 33},
        {"type": "penalti", "teamId": 1, "playerId": 7, "minute": 40}
      ]
    },
    {
      "id": "102", "teamId": "1", "rivalId": "4", "isHome": false,
      "kickoff": 1727020800000, "competition": "superliga", "finished": false
    }
  ]
}"#;

fn season_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SEASON.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_normalize_file() {
    let file = season_file();
    let matches = load_matches(file.path()).unwrap();
    assert_eq!(matches.len(), 2);

    let first = &matches[0];
    assert_eq!(first.id.as_str(), "101");
    assert_eq!(first.competition, Competition::Cup);
    assert_eq!(first.kickoff.unwrap().to_rfc3339(), "2024-09-14T14:00:00+00:00");
    // The slot with an unknown role is dropped.
    assert_eq!(first.lineup.len(), 2);
    assert_eq!(first.lineup[0].minutes, 90);
    assert_eq!(first.lineup[1].role, Role::Bench);
    assert_eq!(first.lineup[1].minutes, 0);
    // So is the event with an unknown type.
    assert_eq!(first.events.len(), 1);
    assert_eq!(first.events[0].kind, EventKind::Goal);

    let second = &matches[1];
    assert!(!second.is_home);
    assert!(!second.finished);
    assert_eq!(second.competition, Competition::League);
    assert_eq!(second.kickoff_millis(), 1_727_020_800_000);
    assert!(second.lineup.is_empty());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    match load_matches(&path) {
        Err(StatsError::MatchFileNotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("Expected MatchFileNotFound, got {:?}", other),
    }
}

#[test]
fn test_record_without_team_is_rejected() {
    let result = parse_matches(r#"[{"id": "m1", "rivalId": "9"}]"#);
    match result {
        Err(StatsError::InvalidRecord { index, reason }) => {
            assert_eq!(index, 0);
            assert!(reason.contains("teamId"));
        }
        other => panic!("Expected InvalidRecord, got {:?}", other),
    }
}

#[test]
fn test_malformed_json() {
    assert!(matches!(parse_matches("{not json"), Err(StatsError::Json(_))));
}

#[test]
fn test_filters_from_env_file() {
    let file = season_file();
    std::env::set_var(MATCHES_ENV_VAR, file.path());

    assert_eq!(resolve_matches_path(None).unwrap(), file.path());

    let filters = club_stats::cli::CommonFilters {
        file: None,
        team_id: None,
        competition: None,
        venue: None,
        include_unfinished: false,
        from: None,
        to: None,
        json: true,
    };
    let finished = load_filtered_matches(&filters).unwrap();
    assert_eq!(finished.len(), 1);

    let everything = load_filtered_matches(&club_stats::cli::CommonFilters {
        include_unfinished: true,
        ..filters
    })
    .unwrap();
    assert_eq!(everything.len(), 2);

    std::env::remove_var(MATCHES_ENV_VAR);
}
