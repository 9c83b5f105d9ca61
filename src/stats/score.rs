use serde::Serialize;

use crate::{
    models::Match,
    types::{EventKind, MatchOutcome},
};


/// Goals for and against the owning team in one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub goals_for: u32,
    pub goals_against: u32,
}

impl MatchScore {
    pub fn outcome(&self) -> MatchOutcome {
        resolve_result(self.goals_for, self.goals_against)
    }

    pub fn is_clean_sheet(&self) -> bool {
        self.goals_against == 0
    }
}

/// Count goal events per side. A goal counts for the team when its `teamId`
/// is the match's team; otherwise for the opponent when its `rivalId` is the
/// match's rival. Goals attributed to neither are ignored.
pub fn resolve_score(m: &Match) -> MatchScore {
    m.events
        .iter()
        .filter(|e| e.kind == EventKind::Goal)
        .fold(MatchScore::default(), |mut score, e| {
            if m.is_team_event(e) {
                score.goals_for += 1;
            } else if m.is_rival_event(e) {
                score.goals_against += 1;
            }
            score
        })
}

pub fn resolve_result(goals_for: u32, goals_against: u32) -> MatchOutcome {
    use std::cmp::Ordering;

    match goals_for.cmp(&goals_against) {
        Ordering::Greater => MatchOutcome::Win,
        Ordering::Less => MatchOutcome::Loss,
        Ordering::Equal => MatchOutcome::Draw,
    }
}
