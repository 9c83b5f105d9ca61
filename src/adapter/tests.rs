//! Unit tests for record normalization

use super::*;
use serde_json::json;

fn raw(value: Value) -> RawMatch {
    serde_json::from_value(value).unwrap()
}

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let m = normalize_match(
            raw(json!({
                "id": "m1",
                "teamId": 1,
                "rivalId": "9",
                "isHome": false,
                "kickoff": "2024-03-02T17:30:00+01:00",
                "competition": "copa",
                "matchday": 4,
                "lineup": [
                    {"playerId": 10, "role": "field", "number": 1, "position": "GK",
                     "minutes": 90, "cleanSheet": true, "goalsConceded": 0},
                    {"playerId": "11", "role": "bench", "minutes": "15"},
                    {"playerId": "12", "role": "unavailable"}
                ],
                "events": [
                    {"matchId": "m1", "minute": 10, "type": "gol", "playerId": 11, "teamId": 1},
                    {"matchId": "m1", "minute": 50, "type": "gol", "rivalId": 9}
                ],
                "opponentNotes": "press high",
                "finished": true
            })),
            0,
        )
        .unwrap();

        assert_eq!(m.id, MatchId::new("m1"));
        assert_eq!(m.team_id, TeamId::new("1"));
        assert_eq!(m.rival_id, RivalId::new("9"));
        assert!(!m.is_home);
        assert_eq!(m.kickoff.unwrap().to_rfc3339(), "2024-03-02T16:30:00+00:00");
        assert_eq!(m.competition, Competition::Cup);
        assert_eq!(m.matchday, Some(4));
        assert_eq!(m.lineup.len(), 3);
        assert_eq!(m.lineup[0].position.as_deref(), Some("GK"));
        assert_eq!(m.lineup[0].clean_sheet, Some(true));
        assert_eq!(m.lineup[1].minutes, 15);
        assert_eq!(m.lineup[2].role, Role::Unavailable);
        assert_eq!(m.events.len(), 2);
        assert_eq!(m.events[0].player_id, Some(PlayerId::new("11")));
        assert_eq!(m.events[1].rival_id, Some(RivalId::new("9")));
        assert_eq!(m.notes, "press high");
        assert!(m.finished);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let m = normalize_match(raw(json!({"id": 3, "teamId": 1, "rivalId": 2})), 0).unwrap();

        assert!(m.is_home);
        assert!(!m.finished);
        assert_eq!(m.kickoff, None);
        assert_eq!(m.competition, Competition::League);
        assert!(m.lineup.is_empty());
        assert!(m.events.is_empty());
        assert_eq!(m.notes, "");
    }

    #[test]
    fn test_unknown_tags_are_normalized_or_dropped() {
        let m = normalize_match(
            raw(json!({
                "id": "m1", "teamId": 1, "rivalId": 2,
                "competition": "Supercopa",
                "lineup": [
                    {"playerId": 1, "role": "injured", "minutes": 0},
                    {"role": "field", "minutes": 90},
                    {"playerId": 2, "role": "bench", "minutes": -5, "position": "CB"}
                ],
                "events": [
                    {"type": "sustitucion", "playerId": 1, "teamId": 1},
                    {"type": "AMARILLA", "playerId": 2, "teamId": 1, "minute": -3}
                ]
            })),
            0,
        )
        .unwrap();

        assert_eq!(m.competition, Competition::League);
        assert_eq!(m.lineup.len(), 1);
        assert_eq!(m.lineup[0].minutes, 0);
        assert_eq!(m.lineup[0].position, None);
        assert_eq!(m.events.len(), 1);
        assert_eq!(m.events[0].kind, EventKind::YellowCard);
        assert_eq!(m.events[0].minute, 0);
    }

    #[test]
    fn test_repeated_player_slot_keeps_first() {
        let m = normalize_match(
            raw(json!({
                "id": "m1", "teamId": 1, "rivalId": 2,
                "lineup": [
                    {"playerId": "P", "role": "field", "minutes": 90},
                    {"playerId": "Q", "role": "bench", "minutes": 20},
                    {"playerId": "P", "role": "bench", "minutes": 10}
                ]
            })),
            0,
        )
        .unwrap();

        assert_eq!(m.lineup.len(), 2);
        let p = m.slot_for(&PlayerId::new("P")).unwrap();
        assert_eq!((p.role, p.minutes), (Role::Field, 90));
    }

    #[test]
    fn test_missing_identifier_is_rejected() {
        let result = normalize_match(raw(json!({"id": "m1", "rivalId": 2})), 4);
        match result {
            Err(StatsError::InvalidRecord { index, reason }) => {
                assert_eq!(index, 4);
                assert!(reason.contains("teamId"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_id_counts_as_missing() {
        let result = normalize_match(raw(json!({"id": "  ", "teamId": 1, "rivalId": 2})), 0);
        assert!(matches!(result, Err(StatsError::InvalidRecord { .. })));
    }

    #[test]
    fn test_object_id_fails_deserialization() {
        let result: std::result::Result<RawMatch, _> =
            serde_json::from_value(json!({"id": {"nested": true}, "teamId": 1, "rivalId": 2}));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod kickoff_tests {
    use super::*;

    #[test]
    fn test_kickoff_formats() {
        let expected = "2024-03-02T18:00:00+00:00";
        for input in [
            json!("2024-03-02T18:00:00Z"),
            json!("2024-03-02T18:00:00"),
            json!("2024-03-02T18:00"),
            json!("2024-03-02 18:00"),
            json!(1_709_402_400_000_i64),
        ] {
            let parsed = parse_kickoff(&input).unwrap();
            assert_eq!(parsed.to_rfc3339(), expected, "input {}", input);
        }
        assert_eq!(
            parse_kickoff(&json!("2024-03-02")).unwrap().to_rfc3339(),
            "2024-03-02T00:00:00+00:00"
        );
    }

    #[test]
    fn test_unparseable_kickoff() {
        assert_eq!(parse_kickoff(&json!("next saturday")), None);
        assert_eq!(parse_kickoff(&json!(true)), None);
        assert_eq!(parse_kickoff(&Value::Null), None);

        let m = normalize_match(
            raw(json!({"id": "m1", "teamId": 1, "rivalId": 2, "kickoff": "soon"})),
            0,
        )
        .unwrap();
        assert_eq!(m.kickoff, None);
        assert_eq!(m.kickoff_millis(), 0);
    }
}

#[cfg(test)]
mod file_tests {
    use super::*;

    #[test]
    fn test_parse_array_and_envelope() {
        let list = r#"[{"id": "a", "teamId": 1, "rivalId": 2}]"#;
        let envelope = r#"{"matches": [{"id": "a", "teamId": 1, "rivalId": 2},
                                       {"id": "b", "teamId": 1, "rivalId": 3}]}"#;

        assert_eq!(parse_matches(list).unwrap().len(), 1);
        assert_eq!(parse_matches(envelope).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(parse_matches("not json"), Err(StatsError::Json(_))));
    }

    #[test]
    fn test_bad_field_reports_record_index() {
        let file = r#"[{"id": "a", "teamId": 1, "rivalId": 2},
                       {"id": "b", "teamId": 1, "rivalId": 2, "isHome": "yes"}]"#;
        match parse_matches(file) {
            Err(StatsError::InvalidRecord { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("invalid type"), "reason: {}", reason);
                assert!(!reason.contains("untagged"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }

        let envelope = r#"{"matches": [{"id": "a", "teamId": 1, "rivalId": 2, "lineup": 5}]}"#;
        assert!(matches!(
            parse_matches(envelope),
            Err(StatsError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_unexpected_file_shape() {
        assert!(matches!(parse_matches("42"), Err(StatsError::Json(_))));
        assert!(matches!(parse_matches(r#"{"games": []}"#), Err(StatsError::Json(_))));
        assert!(matches!(
            parse_matches(r#"{"matches": {"id": "a"}}"#),
            Err(StatsError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        match load_matches(&path) {
            Err(StatsError::MatchFileNotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("Expected MatchFileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.json");
        std::fs::write(&path, r#"[{"id": "a", "teamId": 1, "rivalId": 2, "finished": true}]"#)
            .unwrap();

        let matches = load_matches(&path).unwrap();
        assert_eq!(matches.len(), 1);
        assert!(matches[0].finished);
    }
}
