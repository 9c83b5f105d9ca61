//! Error types for the club statistics engine and CLI

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Match file not provided and {env_var} environment variable not set")]
    MissingMatchFile { env_var: String },

    #[error("Match file not found: {}", path.display())]
    MatchFileNotFound { path: PathBuf },

    #[error("Invalid identifier: {value:?}")]
    InvalidId { value: String },

    #[error("Invalid competition: {value}")]
    InvalidCompetition { value: String },

    #[error("Invalid venue: {value} (expected home or away)")]
    InvalidVenue { value: String },

    #[error("Match not found: {id}")]
    MatchNotFound { id: String },

    #[error("Invalid match record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
