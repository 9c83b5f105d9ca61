//! Team summary command implementation

use serde::Serialize;

use crate::{
    cli::CommonFilters,
    models::Match,
    stats::{analyze_team_form, summarize_team_stats, ResultsBreakdown, TeamFormSummary, TeamStats},
    Result,
};

use super::{common::print_json, load_filtered_matches};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamReport {
    pub stats: TeamStats,
    pub form: TeamFormSummary,
}

pub fn build_team_report(matches: &[Match]) -> TeamReport {
    TeamReport {
        stats: summarize_team_stats(matches),
        form: analyze_team_form(matches),
    }
}

fn breakdown_line(label: &str, b: &ResultsBreakdown) -> String {
    format!(
        "{:<10} P {:>3}  W {:>3} D {:>3} L {:>3}  GF {:>3} GA {:>3}",
        label, b.matches, b.wins, b.draws, b.losses, b.goals_for, b.goals_against
    )
}

/// Handle the team command
pub fn handle_team(filters: CommonFilters) -> Result<()> {
    let matches = load_filtered_matches(&filters)?;
    let report = build_team_report(&matches);

    if filters.json {
        return print_json(&report);
    }

    let s = &report.stats;
    // tarpaulin::skip - console output
    println!(
        "P {}  W {} D {} L {}  GF {} GA {} GD {:+}  Pts {}  CS {}  YC {} RC {}",
        s.matches,
        s.wins,
        s.draws,
        s.losses,
        s.goals_for,
        s.goals_against,
        s.goal_difference,
        s.points,
        s.clean_sheets,
        s.yellow_cards,
        s.red_cards,
    );
    println!("{}", breakdown_line("home", &s.home));
    println!("{}", breakdown_line("away", &s.away));
    for (competition, breakdown) in &s.competitions {
        println!("{}", breakdown_line(competition.tag(), breakdown));
    }

    let f = &report.form;
    println!(
        "streaks: win {} (best {})  unbeaten {} (best {})  scoring {} (best {})",
        f.current_win_streak,
        f.longest_win_streak,
        f.current_unbeaten_streak,
        f.longest_unbeaten_streak,
        f.current_scoring_streak,
        f.longest_scoring_streak,
    );
    println!(
        "last {}: {} pts  GF {} GA {}  CS {}",
        f.last_five.matches,
        f.last_five.points,
        f.last_five.goals_for,
        f.last_five.goals_against,
        f.last_five.clean_sheets,
    );

    Ok(())
}
