//! Team-level results summary with home/away and per-competition splits.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    models::Match,
    stats::score::{resolve_score, MatchScore},
    types::{Competition, EventKind, MatchOutcome},
};


/// W/D/L and goals for one slice of the match set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsBreakdown {
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl ResultsBreakdown {
    fn record(&mut self, score: MatchScore) {
        self.matches += 1;
        match score.outcome() {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
        self.goals_for += score.goals_for;
        self.goals_against += score.goals_against;
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub clean_sheets: u32,
    pub average_goals_for: f64,
    pub average_goals_against: f64,
    pub points: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub home: ResultsBreakdown,
    pub away: ResultsBreakdown,
    pub competitions: BTreeMap<Competition, ResultsBreakdown>,
}

pub fn summarize_team_stats(matches: &[Match]) -> TeamStats {
    let mut totals = ResultsBreakdown::default();
    let mut stats = TeamStats::default();

    for m in matches {
        let score = resolve_score(m);
        totals.record(score);

        if score.is_clean_sheet() {
            stats.clean_sheets += 1;
        }

        let venue = if m.is_home {
            &mut stats.home
        } else {
            &mut stats.away
        };
        venue.record(score);

        stats
            .competitions
            .entry(m.competition)
            .or_default()
            .record(score);

        for event in m.events.iter().filter(|e| m.is_team_event(e)) {
            match event.kind {
                EventKind::YellowCard => stats.yellow_cards += 1,
                EventKind::RedCard => stats.red_cards += 1,
                EventKind::Goal | EventKind::Assist => {}
            }
        }
    }

    stats.matches = totals.matches;
    stats.wins = totals.wins;
    stats.draws = totals.draws;
    stats.losses = totals.losses;
    stats.goals_for = totals.goals_for;
    stats.goals_against = totals.goals_against;
    stats.goal_difference = i64::from(totals.goals_for) - i64::from(totals.goals_against);
    stats.points = totals.wins * 3 + totals.draws;
    if totals.matches > 0 {
        stats.average_goals_for = f64::from(totals.goals_for) / f64::from(totals.matches);
        stats.average_goals_against = f64::from(totals.goals_against) / f64::from(totals.matches);
    }

    stats
}
