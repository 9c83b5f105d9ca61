//! Match-statistics aggregation engine.
//!
//! Every function here is a pure fold over an immutable match set: no I/O,
//! no filtering, no state kept between calls. Callers narrow the match set
//! (see [`crate::filters`]) before invoking them.
//!
//! - `score`: goals for/against and result of one match
//! - `player`: per-player cumulative statistics
//! - `team`: team results with home/away and competition splits
//! - `opponent`: head-to-head record per opponent
//! - `form`: team streaks and recent form
//! - `timeline`: one player's per-match lines
//! - `streaks`: player streaks over a timeline
//! - `player_opponent`: one player's record per opponent

pub mod form;
pub mod opponent;
pub mod player;
pub mod player_opponent;
pub mod score;
pub mod streaks;
pub mod team;
pub mod timeline;

pub use form::{analyze_team_form, RecentTeamForm, TeamFormSummary};
pub use opponent::{build_opponent_breakdown, OpponentBreakdown};
pub use player::{
    aggregate_player_stats, create_baseline_player_stats, roster_player_stats, PlayerMatchStats,
};
pub use player_opponent::{build_player_opponent_breakdown, PlayerOpponentBreakdown};
pub use score::{resolve_result, resolve_score, MatchScore};
pub use streaks::{analyze_player_streaks, PlayerStreakSummary, RecentPlayerForm};
pub use team::{summarize_team_stats, ResultsBreakdown, TeamStats};
pub use timeline::{build_player_match_summaries, PlayerMatchSummary};
