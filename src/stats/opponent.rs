use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    models::Match,
    stats::score::{resolve_score, MatchScore},
    types::{MatchOutcome, RivalId},
};


/// Head-to-head record against one opponent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentBreakdown {
    pub opponent_id: RivalId,
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub clean_sheets: u32,
    pub points: u32,
    /// Average points per match, rounded to 2 decimals.
    pub points_per_match: f64,
}

impl OpponentBreakdown {
    fn new(opponent_id: RivalId) -> Self {
        Self {
            opponent_id,
            matches: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            clean_sheets: 0,
            points: 0,
            points_per_match: 0.0,
        }
    }

    fn record(&mut self, score: MatchScore) {
        let outcome = score.outcome();
        self.matches += 1;
        match outcome {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
        self.goals_for += score.goals_for;
        self.goals_against += score.goals_against;
        if score.is_clean_sheet() {
            self.clean_sheets += 1;
        }
        self.points += outcome.points();

        // Derived fields are re-derived from the counters after every record.
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.points_per_match = round2(f64::from(self.points) / f64::from(self.matches));
    }
}

pub fn build_opponent_breakdown(matches: &[Match]) -> BTreeMap<RivalId, OpponentBreakdown> {
    let mut breakdown: BTreeMap<RivalId, OpponentBreakdown> = BTreeMap::new();
    for m in matches {
        breakdown
            .entry(m.rival_id.clone())
            .or_insert_with(|| OpponentBreakdown::new(m.rival_id.clone()))
            .record(resolve_score(m));
    }
    breakdown
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
