//! Player leaderboard command implementation.
//!
//! Streaks for every listed player are computed in parallel; each player's
//! timeline is an independent fold over the same shared match slice.

use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

use crate::{
    cli::{CommonFilters, PlayerSort},
    models::Match,
    stats::{
        analyze_player_streaks, build_player_match_summaries, roster_player_stats,
        PlayerMatchStats,
    },
    types::PlayerId,
    Result,
};

use super::{
    common::{format_rate, print_json},
    load_filtered_matches,
};

/// One leaderboard line: cumulative stats plus current form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    #[serde(flatten)]
    pub stats: PlayerMatchStats,
    pub current_playing_streak: u32,
    pub current_goal_involvement_streak: u32,
}

fn sort_key(stats: &PlayerMatchStats, sort: PlayerSort) -> f64 {
    match sort {
        PlayerSort::Involvements => f64::from(stats.goal_involvements),
        PlayerSort::Goals => f64::from(stats.goals),
        PlayerSort::Assists => f64::from(stats.assists),
        PlayerSort::Minutes => f64::from(stats.minutes),
        PlayerSort::Per90 => stats.goal_involvements_per_90,
        PlayerSort::Participation => stats.participation_rate,
    }
}

/// Build the leaderboard, highest `sort` value first; ties fall back to
/// player id order.
pub fn build_leaderboard(
    matches: &[Match],
    roster: &[PlayerId],
    sort: PlayerSort,
    limit: Option<usize>,
) -> Vec<PlayerRow> {
    let stats: Vec<PlayerMatchStats> = roster_player_stats(matches, roster).into_values().collect();

    let mut rows: Vec<PlayerRow> = stats
        .into_par_iter()
        .map(|stats| {
            let timeline = build_player_match_summaries(matches, &stats.player_id);
            let streaks = analyze_player_streaks(&timeline);
            PlayerRow {
                stats,
                current_playing_streak: streaks.current_playing_streak,
                current_goal_involvement_streak: streaks.current_goal_involvement_streak,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        sort_key(&b.stats, sort)
            .partial_cmp(&sort_key(&a.stats, sort))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.stats.player_id.cmp(&b.stats.player_id))
    });
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

/// Handle the players command
pub fn handle_players(
    filters: CommonFilters,
    roster: Vec<PlayerId>,
    sort: PlayerSort,
    limit: Option<usize>,
) -> Result<()> {
    let matches = load_filtered_matches(&filters)?;
    let rows = build_leaderboard(&matches, &roster, sort, limit);

    if filters.json {
        return print_json(&rows);
    }

    for row in rows {
        let s = &row.stats;
        // tarpaulin::skip - console output
        println!(
            "{:<12} apps {:>3}/{:<3} starts {:>3}  min {:>5}  G {:>3} A {:>3}  GI/90 {:.2}  YC {} RC {}  part {}  streak {} (GI {})",
            s.player_id.as_str(),
            s.played,
            s.matches,
            s.starts,
            s.minutes,
            s.goals,
            s.assists,
            s.goal_involvements_per_90,
            s.yellow_cards,
            s.red_cards,
            format_rate(s.participation_rate),
            row.current_playing_streak,
            row.current_goal_involvement_streak,
        );
    }

    Ok(())
}
