use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    stats::timeline::PlayerMatchSummary,
    types::{MatchOutcome, RivalId},
};

/// One player's record against one opponent, over matches they played.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerOpponentBreakdown {
    pub opponent_id: RivalId,
    pub matches: u32,
    pub starts: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals: u32,
    pub assists: u32,
    pub goal_involvements: u32,
    pub minutes: u32,
}

impl PlayerOpponentBreakdown {
    fn new(opponent_id: RivalId) -> Self {
        Self {
            opponent_id,
            matches: 0,
            starts: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals: 0,
            assists: 0,
            goal_involvements: 0,
            minutes: 0,
        }
    }

    fn record(&mut self, summary: &PlayerMatchSummary) {
        self.matches += 1;
        if summary.started {
            self.starts += 1;
        }
        match summary.result {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
        self.goals += summary.goals;
        self.assists += summary.assists;
        self.minutes += summary.minutes;
        self.goal_involvements = self.goals + self.assists;
    }
}

/// Group a player's timeline by opponent. Lines where the player did not
/// play are skipped.
pub fn build_player_opponent_breakdown(
    summaries: &[PlayerMatchSummary],
) -> BTreeMap<RivalId, PlayerOpponentBreakdown> {
    let mut breakdown: BTreeMap<RivalId, PlayerOpponentBreakdown> = BTreeMap::new();
    for summary in summaries.iter().filter(|s| s.played) {
        breakdown
            .entry(summary.opponent_id.clone())
            .or_insert_with(|| PlayerOpponentBreakdown::new(summary.opponent_id.clone()))
            .record(summary);
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::*;
    use crate::stats::timeline::build_player_match_summaries;
    use crate::types::{EventKind, PlayerId, Role};

    #[test]
    fn test_breakdown_over_played_matches() {
        let matches = vec![
            match_on("m1", 1)
                .against("a")
                .with_slot(slot("P", Role::Field, 90))
                .with_player_event(EventKind::Goal, "P", 10)
                .with_player_event(EventKind::Assist, "P", 20),
            match_on("m2", 2)
                .against("a")
                .with_slot(slot("P", Role::Bench, 25))
                .with_score(0, 1),
            match_on("m3", 3)
                .against("a")
                .with_slot(slot("P", Role::Bench, 0))
                .with_score(0, 4),
            match_on("m4", 4)
                .against("b")
                .with_player_event(EventKind::Goal, "P", 88)
                .with_score(0, 1),
        ];

        let timeline = build_player_match_summaries(&matches, &PlayerId::new("P"));
        let breakdown = build_player_opponent_breakdown(&timeline);

        let a = &breakdown[&RivalId::new("a")];
        assert_eq!(a.matches, 2);
        assert_eq!(a.starts, 1);
        assert_eq!((a.wins, a.draws, a.losses), (1, 0, 1));
        assert_eq!(a.goals, 1);
        assert_eq!(a.assists, 1);
        assert_eq!(a.goal_involvements, 2);
        assert_eq!(a.minutes, 115);

        let b = &breakdown[&RivalId::new("b")];
        assert_eq!(b.matches, 1);
        assert_eq!(b.starts, 0);
        assert_eq!(b.draws, 1);
        assert_eq!(b.goal_involvements, 1);
    }

    #[test]
    fn test_empty_timeline() {
        assert!(build_player_opponent_breakdown(&[]).is_empty());
    }
}
