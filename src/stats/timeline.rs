//! One player's chronological timeline of per-match summaries.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::{chronological, Match},
    stats::score::resolve_score,
    types::{Competition, EventKind, MatchId, MatchOutcome, PlayerId, RivalId},
};


/// A player's line for one match.
///
/// `result` and the score are the owning team's, whether or not the player
/// took part.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchSummary {
    pub match_id: MatchId,
    pub kickoff: Option<DateTime<Utc>>,
    pub opponent_id: RivalId,
    pub competition: Competition,
    pub is_home: bool,
    pub minutes: u32,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub result: MatchOutcome,
    pub goals_for: u32,
    pub goals_against: u32,
    pub started: bool,
    pub played: bool,
}

impl PlayerMatchSummary {
    pub fn goal_involvements(&self) -> u32 {
        self.goals + self.assists
    }
}

fn summarize(m: &Match, player_id: &PlayerId) -> Option<PlayerMatchSummary> {
    let slot = m.slot_for(player_id);
    let mut events = m.player_events(player_id).peekable();
    if slot.is_none() && events.peek().is_none() {
        return None;
    }

    let score = resolve_score(m);
    let mut summary = PlayerMatchSummary {
        match_id: m.id.clone(),
        kickoff: m.kickoff,
        opponent_id: m.rival_id.clone(),
        competition: m.competition,
        is_home: m.is_home,
        minutes: slot.map(|s| s.credited_minutes()).unwrap_or(0),
        goals: 0,
        assists: 0,
        yellow_cards: 0,
        red_cards: 0,
        result: score.outcome(),
        goals_for: score.goals_for,
        goals_against: score.goals_against,
        started: slot.is_some_and(|s| s.is_start()),
        // Without a slot the player is only known through their events.
        played: slot.map_or(true, |s| s.counts_as_played()),
    };

    for event in events {
        match event.kind {
            EventKind::Goal => summary.goals += 1,
            EventKind::Assist => summary.assists += 1,
            EventKind::YellowCard => summary.yellow_cards += 1,
            EventKind::RedCard => summary.red_cards += 1,
        }
    }

    Some(summary)
}

/// Build the player's timeline, most recent match first, in the reverse of
/// [`chronological`] order. Matches where the player has neither a lineup
/// slot nor an attributable event are omitted.
pub fn build_player_match_summaries(
    matches: &[Match],
    player_id: &PlayerId,
) -> Vec<PlayerMatchSummary> {
    chronological(matches)
        .into_iter()
        .rev()
        .filter_map(|m| summarize(m, player_id))
        .collect()
}
