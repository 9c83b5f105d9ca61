//! Type-safe identifiers and tag enums for match records.

pub mod ids;
pub mod tags;

pub use ids::{MatchId, PlayerId, RivalId, TeamId};
pub use tags::{Competition, EventKind, MatchOutcome, Role, Venue};
