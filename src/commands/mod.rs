//! Command implementations for the club-stats CLI

pub mod common;
pub mod match_report;
pub mod opponents;
pub mod player;
pub mod players;
pub mod team;


use std::path::PathBuf;
use tracing::info;

use crate::{
    adapter::load_matches, cli::CommonFilters, models::Match, Result, StatsError,
    MATCHES_ENV_VAR,
};

/// Resolve the match file from the flag, then the environment variable, then
/// the per-user data directory.
pub fn resolve_matches_path(file: Option<PathBuf>) -> Result<PathBuf> {
    file.or_else(|| {
        std::env::var(MATCHES_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    })
    .or_else(default_matches_path)
    .ok_or_else(|| StatsError::MissingMatchFile {
        env_var: MATCHES_ENV_VAR.to_string(),
    })
}

/// Path: <data dir>/club-stats/matches.json
pub fn default_matches_path() -> Option<PathBuf> {
    dirs::data_dir().map(|base| base.join("club-stats").join("matches.json"))
}

/// Load the match file and narrow it with the command's filters.
pub fn load_filtered_matches(filters: &CommonFilters) -> Result<Vec<Match>> {
    let path = resolve_matches_path(filters.file.clone())?;
    let all = load_matches(&path)?;
    let selected = filters.match_filter().apply(&all);
    info!(
        path = %path.display(),
        loaded = all.len(),
        selected = selected.len(),
        "matches ready"
    );
    Ok(selected)
}
