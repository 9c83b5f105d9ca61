//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use club_stats::{
    cli::{ClubStats, Commands},
    commands::{
        match_report::handle_match, opponents::handle_opponents, player::handle_player,
        players::handle_players, team::handle_team,
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("club_stats=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let app = ClubStats::parse();

    match app.command {
        Commands::Team { filters } => handle_team(filters)?,
        Commands::Opponents { filters } => handle_opponents(filters)?,
        Commands::Players {
            filters,
            roster,
            sort,
            limit,
        } => handle_players(filters, roster, sort, limit)?,
        Commands::Player {
            filters,
            player_id,
            recent,
        } => handle_player(filters, player_id, recent)?,
        Commands::Match { filters, match_id } => handle_match(filters, match_id)?,
    }

    Ok(())
}
