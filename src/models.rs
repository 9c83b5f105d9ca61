//! Strict match records consumed by the statistics engine.
//!
//! Records reach this shape only through [`crate::adapter`]; every engine
//! function can assume the invariants documented here.

use crate::types::{Competition, EventKind, MatchId, PlayerId, RivalId, Role, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One played (or scheduled) match of the owning team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub team_id: TeamId,
    pub rival_id: RivalId,
    pub is_home: bool,
    /// `None` when the stored kickoff was missing or unparseable.
    pub kickoff: Option<DateTime<Utc>>,
    pub competition: Competition,
    pub matchday: Option<u32>,
    pub lineup: Vec<LineupSlot>,
    pub events: Vec<MatchEvent>,
    pub notes: String,
    pub finished: bool,
}

impl Match {
    /// Sort key for chronological ordering. Missing kickoff sorts as the epoch.
    pub fn kickoff_millis(&self) -> i64 {
        self.kickoff.map(|k| k.timestamp_millis()).unwrap_or(0)
    }

    /// The player's lineup slot, if listed for this match.
    pub fn slot_for(&self, player_id: &PlayerId) -> Option<&LineupSlot> {
        self.lineup.iter().find(|slot| &slot.player_id == player_id)
    }

    /// Event attributed to the owning team.
    pub fn is_team_event(&self, event: &MatchEvent) -> bool {
        event.team_id.as_ref() == Some(&self.team_id)
    }

    /// Event attributed to the opponent.
    pub fn is_rival_event(&self, event: &MatchEvent) -> bool {
        event.rival_id.as_ref() == Some(&self.rival_id)
    }

    /// Owning-team events credited to a player.
    pub fn player_events<'a>(
        &'a self,
        player_id: &'a PlayerId,
    ) -> impl Iterator<Item = &'a MatchEvent> + 'a {
        self.events.iter().filter(move |event| {
            self.is_team_event(event) && event.player_id.as_ref() == Some(player_id)
        })
    }
}

/// Matches oldest first by kickoff. Equal kickoffs, including every undated
/// match, keep their input order: a later entry counts as the more recent.
pub fn chronological(matches: &[Match]) -> Vec<&Match> {
    let mut ordered: Vec<&Match> = matches.iter().collect();
    ordered.sort_by_key(|m| m.kickoff_millis());
    ordered
}

/// One player's participation record for a single match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupSlot {
    pub player_id: PlayerId,
    pub role: Role,
    pub number: Option<u32>,
    /// Formation position; only meaningful for [`Role::Field`].
    pub position: Option<String>,
    pub minutes: u32,
    pub clean_sheet: Option<bool>,
    pub goals_conceded: Option<u32>,
}

impl LineupSlot {
    /// Minutes recorded, or a `field` role even with no minutes. Never for
    /// unavailable players.
    pub fn counts_as_played(&self) -> bool {
        match self.role {
            Role::Unavailable => false,
            Role::Field => true,
            Role::Bench => self.minutes > 0,
        }
    }

    pub fn is_start(&self) -> bool {
        self.role == Role::Field
    }

    /// Minutes credited to the player; unavailable players contribute none.
    pub fn credited_minutes(&self) -> u32 {
        if self.role.is_called_up() {
            self.minutes
        } else {
            0
        }
    }
}

/// A timestamped goal, card or assist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvent {
    pub match_id: MatchId,
    pub minute: u32,
    pub kind: EventKind,
    pub player_id: Option<PlayerId>,
    pub team_id: Option<TeamId>,
    pub rival_id: Option<RivalId>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_kickoff_millis_defaults_to_epoch() {
        let mut m = match_on("m1", 5);
        assert!(m.kickoff_millis() > 0);
        m.kickoff = None;
        assert_eq!(m.kickoff_millis(), 0);
    }

    #[test]
    fn test_counts_as_played() {
        assert!(slot("p", Role::Field, 0).counts_as_played());
        assert!(slot("p", Role::Bench, 12).counts_as_played());
        assert!(!slot("p", Role::Bench, 0).counts_as_played());
        assert!(!slot("p", Role::Unavailable, 90).counts_as_played());
        assert_eq!(slot("p", Role::Unavailable, 90).credited_minutes(), 0);
    }

    #[test]
    fn test_player_events_require_team_attribution() {
        let m = match_on("m1", 1).with_player_event(EventKind::Goal, "p1", 10);
        let mut foreign = team_event(&m, EventKind::Goal, Some("p1"), 20);
        foreign.team_id = Some(TeamId::new("other"));
        let m = Match {
            events: [m.events.clone(), vec![foreign]].concat(),
            ..m
        };

        let pid = PlayerId::new("p1");
        assert_eq!(m.player_events(&pid).count(), 1);
    }
}
