//! Single player report: cumulative stats, streaks, per-opponent record and
//! timeline.

use serde::Serialize;

use crate::{
    cli::CommonFilters,
    models::Match,
    stats::{
        aggregate_player_stats, analyze_player_streaks, build_player_match_summaries,
        build_player_opponent_breakdown, create_baseline_player_stats, PlayerMatchStats,
        PlayerMatchSummary, PlayerOpponentBreakdown, PlayerStreakSummary,
    },
    types::PlayerId,
    Result,
};

use super::{
    common::{format_kickoff, format_rate, print_json},
    load_filtered_matches,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerReport {
    pub stats: PlayerMatchStats,
    pub streaks: PlayerStreakSummary,
    pub opponents: Vec<PlayerOpponentBreakdown>,
    /// Most recent first.
    pub timeline: Vec<PlayerMatchSummary>,
}

/// A player without any recorded match still gets a zeroed report.
pub fn build_player_report(matches: &[Match], player_id: &PlayerId) -> PlayerReport {
    let stats = aggregate_player_stats(matches)
        .remove(player_id)
        .unwrap_or_else(|| create_baseline_player_stats(player_id.clone(), matches.len() as u32));
    let timeline = build_player_match_summaries(matches, player_id);

    PlayerReport {
        stats,
        streaks: analyze_player_streaks(&timeline),
        opponents: build_player_opponent_breakdown(&timeline)
            .into_values()
            .collect(),
        timeline,
    }
}

/// Handle the player command
pub fn handle_player(filters: CommonFilters, player_id: PlayerId, recent: usize) -> Result<()> {
    let matches = load_filtered_matches(&filters)?;
    let report = build_player_report(&matches, &player_id);

    if filters.json {
        return print_json(&report);
    }

    let s = &report.stats;
    // tarpaulin::skip - console output
    println!(
        "{}: apps {}/{} starts {} min {}  G {} A {}  GI/90 {:.2}  W {} D {} L {}  avail {}",
        s.player_id,
        s.played,
        s.matches,
        s.starts,
        s.minutes,
        s.goals,
        s.assists,
        s.goal_involvements_per_90,
        s.wins,
        s.draws,
        s.losses,
        format_rate(s.availability_rate),
    );

    let st = &report.streaks;
    let drought = st
        .matches_since_last_goal_involvement
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "playing {} (best {})  starting {} (best {})  GI {} (best {})  since last GI {}  win rate {}",
        st.current_playing_streak,
        st.longest_playing_streak,
        st.current_starting_streak,
        st.longest_starting_streak,
        st.current_goal_involvement_streak,
        st.longest_goal_involvement_streak,
        drought,
        format_rate(st.win_rate_when_played),
    );

    for line in report.timeline.iter().take(recent) {
        println!(
            "{} {:<12} {} {}-{} {:<3} min {:>3}  G {} A {}{}",
            format_kickoff(line.kickoff),
            line.opponent_id.as_str(),
            line.result,
            line.goals_for,
            line.goals_against,
            if line.started { "XI" } else if line.played { "SUB" } else { "-" },
            line.minutes,
            line.goals,
            line.assists,
            if line.red_cards > 0 { "  RC" } else if line.yellow_cards > 0 { "  YC" } else { "" },
        );
    }

    for opp in &report.opponents {
        println!(
            "vs {:<12} P {} S {}  W {} D {} L {}  G {} A {}  min {}",
            opp.opponent_id.as_str(),
            opp.matches,
            opp.starts,
            opp.wins,
            opp.draws,
            opp.losses,
            opp.goals,
            opp.assists,
            opp.minutes,
        );
    }

    Ok(())
}
