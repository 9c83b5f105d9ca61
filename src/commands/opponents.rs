//! Opponent breakdown command implementation

use crate::{
    cli::CommonFilters,
    models::Match,
    stats::{build_opponent_breakdown, OpponentBreakdown},
    Result,
};

use super::{common::print_json, load_filtered_matches};

/// Opponents ordered by points per match, best record first. Ties keep
/// opponent id order.
pub fn ranked_opponents(matches: &[Match]) -> Vec<OpponentBreakdown> {
    let mut rows: Vec<OpponentBreakdown> = build_opponent_breakdown(matches).into_values().collect();
    rows.sort_by(|a, b| {
        b.points_per_match
            .partial_cmp(&a.points_per_match)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

/// Handle the opponents command
pub fn handle_opponents(filters: CommonFilters) -> Result<()> {
    let matches = load_filtered_matches(&filters)?;
    let rows = ranked_opponents(&matches);

    if filters.json {
        return print_json(&rows);
    }

    for row in rows {
        // tarpaulin::skip - console output
        println!(
            "{:<16} P {:>3}  W {:>3} D {:>3} L {:>3}  GF {:>3} GA {:>3} GD {:>+4}  CS {:>3}  {:.2} ppm",
            row.opponent_id.as_str(),
            row.matches,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            row.clean_sheets,
            row.points_per_match,
        );
    }

    Ok(())
}
