//! Boundary between stored match records and the statistics engine.
//!
//! This is the single place where loosely typed input is coerced:
//! - `raw`: permissive serde shapes of the stored records
//! - normalization into [`crate::models::Match`], logging every coercion
//! - loading match files from disk

pub mod raw;

#[cfg(test)]
mod tests;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

use crate::{
    error::{Result, StatsError},
    models::{LineupSlot, Match, MatchEvent},
    types::{Competition, EventKind, MatchId, PlayerId, RivalId, Role, TeamId},
};
use raw::{match_records, RawEvent, RawLineupSlot, RawMatch};

const NAIVE_KICKOFF_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored kickoff. Offset-less times are taken as UTC; a bare date
/// is midnight UTC. Anything unparseable is `None`.
pub fn parse_kickoff(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::String(s) => parse_kickoff_str(s.trim()),
        _ => None,
    }
}

fn parse_kickoff_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_KICKOFF_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Clamp a stored count to a non-negative whole number.
fn non_negative(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

fn required_id(value: Option<String>, field: &str, index: usize) -> Result<String> {
    value.ok_or_else(|| StatsError::InvalidRecord {
        index,
        reason: format!("missing {}", field),
    })
}

fn normalize_slot(raw: RawLineupSlot, match_id: &MatchId) -> Option<LineupSlot> {
    let Some(player_id) = raw.player_id else {
        warn!(match_id = %match_id, "dropping lineup slot without playerId");
        return None;
    };
    let role_tag = raw.role.unwrap_or_default();
    let Some(role) = Role::from_tag(&role_tag) else {
        warn!(match_id = %match_id, player_id = %player_id, role = %role_tag, "dropping lineup slot with unknown role");
        return None;
    };

    let minutes = raw.minutes.unwrap_or(0.0);
    if minutes < 0.0 {
        warn!(match_id = %match_id, player_id = %player_id, minutes, "clamping negative minutes to 0");
    }

    Some(LineupSlot {
        player_id: PlayerId::new(player_id),
        role,
        number: raw.number.map(non_negative),
        position: raw.position.filter(|p| !p.trim().is_empty() && role == Role::Field),
        minutes: non_negative(minutes),
        clean_sheet: raw.clean_sheet,
        goals_conceded: raw.goals_conceded.map(non_negative),
    })
}

fn normalize_event(raw: RawEvent, match_id: &MatchId) -> Option<MatchEvent> {
    let tag = raw.kind.unwrap_or_default();
    let Some(kind) = EventKind::from_tag(&tag) else {
        warn!(match_id = %match_id, kind = %tag, "dropping event with unknown type");
        return None;
    };
    if let Some(event_match) = raw.match_id.as_deref() {
        if event_match != match_id.as_str() {
            debug!(match_id = %match_id, event_match, "event carries a different matchId; keeping it under its parent match");
        }
    }

    Some(MatchEvent {
        match_id: match_id.clone(),
        minute: non_negative(raw.minute.unwrap_or(0.0)),
        kind,
        player_id: raw.player_id.map(PlayerId::new),
        team_id: raw.team_id.map(TeamId::new),
        rival_id: raw.rival_id.map(RivalId::new),
    })
}

/// Normalize one stored record. `index` is its position in the source
/// collection, reported in errors.
pub fn normalize_match(raw: RawMatch, index: usize) -> Result<Match> {
    let id = MatchId::new(required_id(raw.id, "id", index)?);
    let team_id = TeamId::new(required_id(raw.team_id, "teamId", index)?);
    let rival_id = RivalId::new(required_id(raw.rival_id, "rivalId", index)?);

    let competition = match raw.competition.as_deref() {
        None => Competition::default(),
        Some(tag) => Competition::from_tag(tag).unwrap_or_else(|| {
            warn!(match_id = %id, competition = tag, "unknown competition, using {}", Competition::default());
            Competition::default()
        }),
    };

    let kickoff = raw.kickoff.as_ref().and_then(|value| {
        let parsed = parse_kickoff(value);
        if parsed.is_none() && !value.is_null() {
            warn!(match_id = %id, kickoff = %value, "unparseable kickoff, treating as missing");
        }
        parsed
    });

    let mut lineup: Vec<LineupSlot> = Vec::with_capacity(raw.lineup.len());
    for slot in raw.lineup.into_iter().filter_map(|slot| normalize_slot(slot, &id)) {
        if lineup.iter().any(|kept| kept.player_id == slot.player_id) {
            warn!(match_id = %id, player_id = %slot.player_id, "dropping repeated lineup slot, keeping the first");
            continue;
        }
        lineup.push(slot);
    }
    let events = raw
        .events
        .into_iter()
        .filter_map(|event| normalize_event(event, &id))
        .collect();

    Ok(Match {
        id,
        team_id,
        rival_id,
        is_home: raw.is_home.unwrap_or(true),
        kickoff,
        competition,
        matchday: raw.matchday.map(non_negative),
        lineup,
        events,
        notes: raw.notes.unwrap_or_default(),
        finished: raw.finished.unwrap_or(false),
    })
}

pub fn normalize_matches(raws: Vec<RawMatch>) -> Result<Vec<Match>> {
    raws.into_iter()
        .enumerate()
        .map(|(index, raw)| normalize_match(raw, index))
        .collect()
}

/// Parse a match file's contents: a JSON array of matches or a
/// `{"matches": [...]}` envelope.
pub fn parse_matches(json: &str) -> Result<Vec<Match>> {
    parse_matches_value(serde_json::from_str(json)?)
}

/// A record that fails to deserialize is reported with its index and the
/// serde message.
pub fn parse_matches_value(value: Value) -> Result<Vec<Match>> {
    match_records(value)?
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let raw: RawMatch =
                serde_json::from_value(record).map_err(|e| StatsError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                })?;
            normalize_match(raw, index)
        })
        .collect()
}

pub fn load_matches(path: &Path) -> Result<Vec<Match>> {
    if !path.exists() {
        return Err(StatsError::MatchFileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let matches = parse_matches(&contents)?;
    debug!(path = %path.display(), matches = matches.len(), "loaded match file");
    Ok(matches)
}
