//! Single match command implementation

use serde::Serialize;

use crate::{
    cli::CommonFilters,
    models::Match,
    stats::resolve_score,
    types::{Competition, MatchId, MatchOutcome, RivalId},
    Result, StatsError,
};

use super::{
    common::{format_kickoff, print_json},
    load_filtered_matches,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub match_id: MatchId,
    pub opponent_id: RivalId,
    pub competition: Competition,
    pub is_home: bool,
    pub kickoff: Option<chrono::DateTime<chrono::Utc>>,
    pub goals_for: u32,
    pub goals_against: u32,
    pub result: MatchOutcome,
}

pub fn build_match_report(matches: &[Match], match_id: &MatchId) -> Result<MatchReport> {
    let m = matches
        .iter()
        .find(|m| &m.id == match_id)
        .ok_or_else(|| StatsError::MatchNotFound {
            id: match_id.to_string(),
        })?;
    let score = resolve_score(m);

    Ok(MatchReport {
        match_id: m.id.clone(),
        opponent_id: m.rival_id.clone(),
        competition: m.competition,
        is_home: m.is_home,
        kickoff: m.kickoff,
        goals_for: score.goals_for,
        goals_against: score.goals_against,
        result: score.outcome(),
    })
}

/// Handle the match command
pub fn handle_match(filters: CommonFilters, match_id: MatchId) -> Result<()> {
    let matches = load_filtered_matches(&filters)?;
    let report = build_match_report(&matches, &match_id)?;

    if filters.json {
        return print_json(&report);
    }

    // tarpaulin::skip - console output
    println!(
        "{} {} {} {} {}-{} {}",
        format_kickoff(report.kickoff),
        report.competition,
        if report.is_home { "vs" } else { "at" },
        report.opponent_id,
        report.goals_for,
        report.goals_against,
        report.result,
    );

    Ok(())
}
