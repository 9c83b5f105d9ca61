//! Caller-side match filtering.
//!
//! The engine aggregates whatever it is given; narrowing by team,
//! competition, venue or date happens here, before any aggregation.

use chrono::NaiveDate;

use crate::{
    models::Match,
    types::{Competition, TeamId, Venue},
};


#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchFilter {
    pub team_id: Option<TeamId>,
    pub competition: Option<Competition>,
    pub venue: Option<Venue>,
    pub include_unfinished: bool,
    /// Inclusive lower bound on the kickoff date (UTC).
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the kickoff date (UTC).
    pub to: Option<NaiveDate>,
}

impl MatchFilter {
    pub fn team(mut self, team_id: Option<TeamId>) -> Self {
        self.team_id = team_id;
        self
    }

    pub fn competition(mut self, competition: Option<Competition>) -> Self {
        self.competition = competition;
        self
    }

    pub fn venue(mut self, venue: Option<Venue>) -> Self {
        self.venue = venue;
        self
    }

    pub fn include_unfinished(mut self, on: bool) -> Self {
        self.include_unfinished = on;
        self
    }

    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn accepts(&self, m: &Match) -> bool {
        if !self.include_unfinished && !m.finished {
            return false;
        }
        if self.team_id.as_ref().is_some_and(|team| team != &m.team_id) {
            return false;
        }
        if self.competition.is_some_and(|c| c != m.competition) {
            return false;
        }
        if self.venue.is_some_and(|v| !v.matches(m.is_home)) {
            return false;
        }
        if self.from.is_none() && self.to.is_none() {
            return true;
        }

        // A date bound excludes matches without a kickoff.
        let Some(day) = m.kickoff.map(|k| k.date_naive()) else {
            return false;
        };
        self.from.map_or(true, |from| day >= from) && self.to.map_or(true, |to| day <= to)
    }

    /// Copy out the accepted matches; the input is left untouched.
    pub fn apply(&self, matches: &[Match]) -> Vec<Match> {
        matches.iter().filter(|m| self.accepts(m)).cloned().collect()
    }
}
