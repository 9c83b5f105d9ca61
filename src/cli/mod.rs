//! CLI argument definitions and parsing.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{
    filters::MatchFilter,
    types::{Competition, MatchId, PlayerId, TeamId, Venue},
};

/// Match source and filtering arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonFilters {
    /// Match file (or set `CLUB_STATS_MATCHES` env var).
    #[clap(long, short)]
    pub file: Option<PathBuf>,

    /// Only matches of this team.
    #[clap(long, short)]
    pub team_id: Option<TeamId>,

    /// Only matches of this competition: liga, copa, amistoso, torneo.
    #[clap(long, short)]
    pub competition: Option<Competition>,

    /// Only home or only away matches.
    #[clap(long, value_enum)]
    pub venue: Option<Venue>,

    /// Include matches not marked as finished.
    #[clap(long)]
    pub include_unfinished: bool,

    /// Earliest kickoff date, inclusive (YYYY-MM-DD).
    #[clap(long)]
    pub from: Option<NaiveDate>,

    /// Latest kickoff date, inclusive (YYYY-MM-DD).
    #[clap(long)]
    pub to: Option<NaiveDate>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

impl CommonFilters {
    pub fn match_filter(&self) -> MatchFilter {
        MatchFilter::default()
            .team(self.team_id.clone())
            .competition(self.competition)
            .venue(self.venue)
            .include_unfinished(self.include_unfinished)
            .between(self.from, self.to)
    }
}

/// Ordering for the player leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlayerSort {
    #[default]
    Involvements,
    Goals,
    Assists,
    Minutes,
    Per90,
    Participation,
}

#[derive(Debug, Parser)]
#[clap(name = "club-stats", about = "Match statistics for a sports club")]
pub struct ClubStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Team results summary and current form.
    Team {
        #[clap(flatten)]
        filters: CommonFilters,
    },

    /// Head-to-head record against every opponent.
    Opponents {
        #[clap(flatten)]
        filters: CommonFilters,
    },

    /// Player leaderboard.
    ///
    /// Aggregates every player who appears in the selected matches. Pass
    /// `--roster` to also list players with no recorded matches.
    Players {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Roster player ids to include even without matches (repeatable).
        #[clap(long = "roster", short = 'r')]
        roster: Vec<PlayerId>,

        /// Sort order.
        #[clap(long, value_enum, default_value_t = PlayerSort::default())]
        sort: PlayerSort,

        /// Show only the first N players.
        #[clap(long)]
        limit: Option<usize>,
    },

    /// One player's timeline, streaks and per-opponent record.
    Player {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Player id.
        #[clap(long, short)]
        player_id: PlayerId,

        /// Number of timeline lines to print (text output only).
        #[clap(long, default_value_t = 10)]
        recent: usize,
    },

    /// Resolved score and result of a single match.
    Match {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Match id.
        #[clap(long, short)]
        match_id: MatchId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_players_command() {
        let cli = ClubStats::try_parse_from([
            "club-stats",
            "players",
            "--file",
            "m.json",
            "-c",
            "copa",
            "--venue",
            "away",
            "-r",
            "7",
            "-r",
            "8",
            "--sort",
            "per90",
            "--limit",
            "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Players {
                filters,
                roster,
                sort,
                limit,
            } => {
                assert_eq!(filters.file, Some(PathBuf::from("m.json")));
                assert_eq!(filters.competition, Some(Competition::Cup));
                assert_eq!(filters.venue, Some(Venue::Away));
                assert_eq!(roster, vec![PlayerId::new("7"), PlayerId::new("8")]);
                assert_eq!(sort, PlayerSort::Per90);
                assert_eq!(limit, Some(5));
            }
            other => panic!("Expected players command, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_competition_rejected() {
        let result = ClubStats::try_parse_from(["club-stats", "team", "-c", "champions"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_filters_build_match_filter() {
        let cli = ClubStats::try_parse_from([
            "club-stats",
            "team",
            "-t",
            "1",
            "--include-unfinished",
            "--from",
            "2024-01-01",
        ])
        .unwrap();

        let Commands::Team { filters } = cli.command else {
            panic!("Expected team command");
        };
        let filter = filters.match_filter();
        assert_eq!(filter.team_id, Some(TeamId::new("1")));
        assert!(filter.include_unfinished);
        assert_eq!(filter.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.to, None);
    }

    #[test]
    fn test_player_requires_id() {
        assert!(ClubStats::try_parse_from(["club-stats", "player"]).is_err());
    }
}
