//! Tag enums carried by match records: competition, lineup role, event kind,
//! venue and result.
//!
//! Every enum serializes to the raw tag used in stored match records
//! (`liga`, `field`, `gol`, ...), never to a display label.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Competition a match was played in.
///
/// Stored records may carry tags outside this set; those normalize to
/// [`Competition::League`] via [`Competition::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Competition {
    #[default]
    #[serde(rename = "liga")]
    League,
    #[serde(rename = "copa")]
    Cup,
    #[serde(rename = "amistoso")]
    Friendly,
    #[serde(rename = "torneo")]
    Tournament,
}

impl Competition {
    pub const ALL: [Competition; 4] = [
        Competition::League,
        Competition::Cup,
        Competition::Friendly,
        Competition::Tournament,
    ];

    /// Raw tag as stored in match records.
    pub fn tag(self) -> &'static str {
        match self {
            Competition::League => "liga",
            Competition::Cup => "copa",
            Competition::Friendly => "amistoso",
            Competition::Tournament => "torneo",
        }
    }

    /// Strict lookup; `None` for anything outside the enumeration.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        Competition::ALL.into_iter().find(|c| c.tag() == tag)
    }

    /// Permissive lookup used at the record boundary.
    pub fn normalize(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_default()
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Competition {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| StatsError::InvalidCompetition {
            value: s.to_string(),
        })
    }
}

/// A player's role in one match's lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Started, placed in the formation.
    Field,
    /// Called up, did not start.
    Bench,
    /// Not called up.
    Unavailable,
}

impl Role {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "field" => Some(Role::Field),
            "bench" => Some(Role::Bench),
            "unavailable" => Some(Role::Unavailable),
            _ => None,
        }
    }

    pub fn is_called_up(self) -> bool {
        self != Role::Unavailable
    }
}

/// Kind of a timestamped match event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "gol")]
    Goal,
    #[serde(rename = "amarilla")]
    YellowCard,
    #[serde(rename = "roja")]
    RedCard,
    #[serde(rename = "asistencia")]
    Assist,
}

impl EventKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "gol" => Some(EventKind::Goal),
            "amarilla" => Some(EventKind::YellowCard),
            "roja" => Some(EventKind::RedCard),
            "asistencia" => Some(EventKind::Assist),
            _ => None,
        }
    }
}

/// Result of a match from the owning team's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    /// League points: 3 for a win, 1 for a draw.
    pub fn points(self) -> u32 {
        match self {
            MatchOutcome::Win => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 0,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchOutcome::Win => "W",
            MatchOutcome::Draw => "D",
            MatchOutcome::Loss => "L",
        };
        write!(f, "{}", s)
    }
}

/// Home or away, used by caller-side filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn matches(self, is_home: bool) -> bool {
        match self {
            Venue::Home => is_home,
            Venue::Away => !is_home,
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Venue::Home => "home",
            Venue::Away => "away",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Venue {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Venue::Home),
            "away" => Ok(Venue::Away),
            _ => Err(StatsError::InvalidVenue {
                value: s.to_string(),
            }),
        }
    }
}
