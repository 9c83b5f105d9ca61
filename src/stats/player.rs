//! Per-player cumulative statistics over a match set.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::{
    models::Match,
    stats::score::resolve_score,
    types::{EventKind, MatchOutcome, PlayerId},
};


/// Cumulative statistics for one player.
///
/// `matches` is the size of the aggregated match set and is the denominator
/// for the participation and availability rates, not the player's own count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchStats {
    pub player_id: PlayerId,
    pub matches: u32,
    pub call_ups: u32,
    pub played: u32,
    pub starts: u32,
    pub minutes: u32,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub clean_sheets: u32,
    pub goals_conceded: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goal_involvements: u32,
    pub participation_rate: f64,
    pub availability_rate: f64,
    pub goal_involvements_per_90: f64,
}

impl PlayerMatchStats {
    fn credit(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
    }

    /// Recompute every derived field from the raw counters.
    fn derive_rates(&mut self) {
        self.goal_involvements = self.goals + self.assists;
        self.participation_rate = ratio(self.played, self.matches);
        self.availability_rate = ratio(self.call_ups, self.matches);
        self.goal_involvements_per_90 = if self.minutes > 0 {
            f64::from(self.goal_involvements) * 90.0 / f64::from(self.minutes)
        } else {
            ratio(self.goal_involvements, self.played)
        };
    }
}

/// Zero-valued stats for a player with no recorded matches.
pub fn create_baseline_player_stats(player_id: PlayerId, matches: u32) -> PlayerMatchStats {
    PlayerMatchStats {
        player_id,
        matches,
        call_ups: 0,
        played: 0,
        starts: 0,
        minutes: 0,
        goals: 0,
        assists: 0,
        yellow_cards: 0,
        red_cards: 0,
        clean_sheets: 0,
        goals_conceded: 0,
        wins: 0,
        draws: 0,
        losses: 0,
        goal_involvements: 0,
        participation_rate: 0.0,
        availability_rate: 0.0,
        goal_involvements_per_90: 0.0,
    }
}

/// Fold a match set into per-player statistics.
pub fn aggregate_player_stats(matches: &[Match]) -> BTreeMap<PlayerId, PlayerMatchStats> {
    let total = matches.len() as u32;
    let mut stats: BTreeMap<PlayerId, PlayerMatchStats> = BTreeMap::new();

    for m in matches {
        let outcome = resolve_score(m).outcome();
        // Players already credited for this match. Only a player's first
        // slot counts, matching `Match::slot_for`.
        let mut counted: HashSet<&PlayerId> = HashSet::new();

        for slot in &m.lineup {
            if !counted.insert(&slot.player_id) {
                continue;
            }
            let entry = stats
                .entry(slot.player_id.clone())
                .or_insert_with(|| create_baseline_player_stats(slot.player_id.clone(), total));

            if slot.role.is_called_up() {
                entry.call_ups += 1;
            }
            if !slot.counts_as_played() {
                continue;
            }

            entry.played += 1;
            if slot.is_start() {
                entry.starts += 1;
            }
            entry.minutes += slot.credited_minutes();
            entry.clean_sheets += u32::from(slot.clean_sheet.unwrap_or(false));
            entry.goals_conceded += slot.goals_conceded.unwrap_or(0);
            entry.credit(outcome);
        }

        for event in m.events.iter().filter(|e| m.is_team_event(e)) {
            let Some(player_id) = event.player_id.as_ref() else {
                continue;
            };

            let entry = stats
                .entry(player_id.clone())
                .or_insert_with(|| create_baseline_player_stats(player_id.clone(), total));

            match event.kind {
                EventKind::Goal => entry.goals += 1,
                EventKind::Assist => entry.assists += 1,
                EventKind::YellowCard => entry.yellow_cards += 1,
                EventKind::RedCard => entry.red_cards += 1,
            }

            // Event-only appearance: no lineup slot, still a call-up and a played match.
            if m.slot_for(player_id).is_none() && counted.insert(player_id) {
                entry.call_ups += 1;
                entry.played += 1;
                entry.credit(outcome);
            }
        }
    }

    for entry in stats.values_mut() {
        entry.derive_rates();
    }

    tracing::debug!(
        matches = total,
        players = stats.len(),
        "aggregated player stats"
    );
    stats
}

/// Aggregated stats padded with a baseline for every roster player that
/// recorded nothing.
pub fn roster_player_stats(
    matches: &[Match],
    roster: &[PlayerId],
) -> BTreeMap<PlayerId, PlayerMatchStats> {
    let total = matches.len() as u32;
    let mut stats = aggregate_player_stats(matches);
    for player_id in roster {
        stats
            .entry(player_id.clone())
            .or_insert_with(|| create_baseline_player_stats(player_id.clone(), total));
    }
    stats
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}
