//! Club Match Statistics Library
//!
//! Aggregates raw match records (lineups plus timestamped events) into
//! player, team, opponent and streak statistics for a sports club.
//!
//! ## Features
//!
//! - **Record Normalization**: Loose JSON match records coerced into typed models
//! - **Player Statistics**: Appearances, minutes, goals, cards, per-90 and rate metrics
//! - **Team Summaries**: Results with home/away and per-competition splits
//! - **Opponent Breakdown**: Head-to-head record against every rival
//! - **Streaks and Form**: Current and longest runs, last-five form, player timelines
//! - **Filtering**: Narrow by team, competition, venue and kickoff window
//!
//! ## Quick Start
//!
//! ```rust
//! use club_stats::{adapter::parse_matches, stats::summarize_team_stats};
//!
//! # fn example() -> club_stats::Result<()> {
//! let matches = parse_matches(
//!     r#"[{"id": "m1", "teamId": "1", "rivalId": "9", "finished": true,
//!          "events": [{"type": "gol", "teamId": "1", "minute": 12}]}]"#,
//! )?;
//!
//! let team = summarize_team_stats(&matches);
//! assert_eq!(team.wins, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a match file to avoid passing `--file` to every command:
//! ```bash
//! export CLUB_STATS_MATCHES=/path/to/matches.json
//! ```

pub mod adapter;
pub mod cli;
pub mod commands;
pub mod error;
pub mod filters;
pub mod models;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{Result, StatsError};
pub use filters::MatchFilter;
pub use models::{LineupSlot, Match, MatchEvent};
pub use types::{Competition, EventKind, MatchId, MatchOutcome, PlayerId, RivalId, Role, TeamId, Venue};

pub const MATCHES_ENV_VAR: &str = "CLUB_STATS_MATCHES";
