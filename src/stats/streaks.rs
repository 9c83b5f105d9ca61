//! Player streaks over a timeline built by
//! [`build_player_match_summaries`](crate::stats::timeline::build_player_match_summaries).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    stats::{
        form::{leading_run, StreakTracker, RECENT_WINDOW},
        timeline::PlayerMatchSummary,
    },
    types::{MatchId, MatchOutcome},
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPlayerForm {
    pub matches: u32,
    pub goals: u32,
    pub assists: u32,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStreakSummary {
    pub total_matches: u32,
    pub played_matches: u32,
    pub current_playing_streak: u32,
    pub longest_playing_streak: u32,
    pub current_starting_streak: u32,
    pub longest_starting_streak: u32,
    pub current_goal_involvement_streak: u32,
    pub longest_goal_involvement_streak: u32,
    /// Position, counting from the most recent match, of the latest match
    /// with a goal or assist.
    pub matches_since_last_goal_involvement: Option<u32>,
    pub last_goal_involvement_match_id: Option<MatchId>,
    pub last_goal_involvement_kickoff: Option<DateTime<Utc>>,
    pub win_rate_when_played: f64,
    pub last_five: RecentPlayerForm,
}

fn involved(summary: &PlayerMatchSummary) -> bool {
    summary.goal_involvements() > 0
}

/// Analyze a timeline ordered most recent first. An empty timeline yields
/// the all-zero summary.
pub fn analyze_player_streaks(summaries: &[PlayerMatchSummary]) -> PlayerStreakSummary {
    let mut playing = StreakTracker::default();
    let mut starting = StreakTracker::default();
    let mut involvement = StreakTracker::default();
    for summary in summaries.iter().rev() {
        playing.push(summary.played);
        starting.push(summary.started);
        involvement.push(involved(summary));
    }

    let last_involvement = summaries
        .iter()
        .enumerate()
        .find(|(_, summary)| involved(summary));

    let played: Vec<&PlayerMatchSummary> = summaries.iter().filter(|s| s.played).collect();
    let wins = played
        .iter()
        .filter(|s| s.result == MatchOutcome::Win)
        .count();
    let win_rate_when_played = if played.is_empty() {
        0.0
    } else {
        wins as f64 / played.len() as f64
    };

    let last_five = summaries.iter().take(RECENT_WINDOW).fold(
        RecentPlayerForm::default(),
        |mut recent, summary| {
            recent.matches += 1;
            recent.goals += summary.goals;
            recent.assists += summary.assists;
            recent.minutes += summary.minutes;
            recent
        },
    );

    PlayerStreakSummary {
        total_matches: summaries.len() as u32,
        played_matches: played.len() as u32,
        current_playing_streak: leading_run(summaries.iter().map(|s| s.played)),
        longest_playing_streak: playing.longest(),
        current_starting_streak: leading_run(summaries.iter().map(|s| s.started)),
        longest_starting_streak: starting.longest(),
        current_goal_involvement_streak: leading_run(summaries.iter().map(involved)),
        longest_goal_involvement_streak: involvement.longest(),
        matches_since_last_goal_involvement: last_involvement.map(|(index, _)| index as u32),
        last_goal_involvement_match_id: last_involvement.map(|(_, s)| s.match_id.clone()),
        last_goal_involvement_kickoff: last_involvement.and_then(|(_, s)| s.kickoff),
        win_rate_when_played,
        last_five,
    }
}
