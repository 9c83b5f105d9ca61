//! Team form: win, unbeaten and scoring streaks plus the trailing five matches.

use serde::Serialize;

use crate::{
    models::{chronological, Match},
    stats::score::{resolve_score, MatchScore},
    types::MatchOutcome,
};


/// Number of recent matches summarized in `last_five`.
pub const RECENT_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTeamForm {
    pub matches: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub clean_sheets: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFormSummary {
    pub matches: u32,
    pub current_win_streak: u32,
    pub current_unbeaten_streak: u32,
    pub current_scoring_streak: u32,
    pub longest_win_streak: u32,
    pub longest_unbeaten_streak: u32,
    pub longest_scoring_streak: u32,
    pub last_five: RecentTeamForm,
}

/// Running length of a streak and the best length seen so far.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StreakTracker {
    current: u32,
    longest: u32,
}

impl StreakTracker {
    /// Extend the run when `holds`, otherwise flush it and reset.
    pub(crate) fn push(&mut self, holds: bool) {
        if holds {
            self.current += 1;
        } else {
            self.flush();
            self.current = 0;
        }
    }

    pub(crate) fn flush(&mut self) {
        self.longest = self.longest.max(self.current);
    }

    /// Longest run, including the one still open at the end of the sequence.
    pub(crate) fn longest(mut self) -> u32 {
        self.flush();
        self.longest
    }
}

/// Length of the run at the head of `conditions`, stopping at the first `false`.
pub(crate) fn leading_run<I>(conditions: I) -> u32
where
    I: IntoIterator<Item = bool>,
{
    conditions.into_iter().take_while(|holds| *holds).count() as u32
}

fn is_win(score: &MatchScore) -> bool {
    score.outcome() == MatchOutcome::Win
}

fn is_unbeaten(score: &MatchScore) -> bool {
    score.outcome() != MatchOutcome::Loss
}

fn scored(score: &MatchScore) -> bool {
    score.goals_for > 0
}

pub fn analyze_team_form(matches: &[Match]) -> TeamFormSummary {
    let scores: Vec<MatchScore> = chronological(matches)
        .into_iter()
        .map(resolve_score)
        .collect();

    let mut wins = StreakTracker::default();
    let mut unbeaten = StreakTracker::default();
    let mut scoring = StreakTracker::default();
    for score in &scores {
        wins.push(is_win(score));
        unbeaten.push(is_unbeaten(score));
        scoring.push(scored(score));
    }

    let last_five = scores
        .iter()
        .rev()
        .take(RECENT_WINDOW)
        .fold(RecentTeamForm::default(), |mut recent, score| {
            recent.matches += 1;
            recent.points += score.outcome().points();
            recent.goals_for += score.goals_for;
            recent.goals_against += score.goals_against;
            if score.is_clean_sheet() {
                recent.clean_sheets += 1;
            }
            recent
        });

    TeamFormSummary {
        matches: scores.len() as u32,
        current_win_streak: leading_run(scores.iter().rev().map(is_win)),
        current_unbeaten_streak: leading_run(scores.iter().rev().map(is_unbeaten)),
        current_scoring_streak: leading_run(scores.iter().rev().map(scored)),
        longest_win_streak: wins.longest(),
        longest_unbeaten_streak: unbeaten.longest(),
        longest_scoring_streak: scoring.longest(),
        last_five,
    }
}
