//! Identifier types for matches, teams, rivals and players.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = StatsError;

            fn from_str(s: &str) -> Result<Self> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(StatsError::InvalidId {
                        value: s.to_string(),
                    });
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Type-safe wrapper for match identifiers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use club_stats::MatchId;
    ///
    /// let id: MatchId = " m-1 ".parse().unwrap();
    /// assert_eq!(id.as_str(), "m-1");
    /// assert!("  ".parse::<MatchId>().is_err());
    /// ```
    MatchId
);

string_id!(
    /// The owning club's team (a club can field several teams).
    TeamId
);

string_id!(
    /// An opponent. Events attributed to the opponent carry this id.
    RivalId
);

string_id!(
    /// Type-safe wrapper for player identifiers
    PlayerId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let id: PlayerId = "  p7 ".parse().unwrap();
        assert_eq!(id, PlayerId::new("p7"));
        assert_eq!(id.to_string(), "p7");
    }

    #[test]
    fn test_parse_rejects_blank() {
        match "   ".parse::<TeamId>() {
            Err(StatsError::InvalidId { value }) => assert_eq!(value, "   "),
            other => panic!("Expected InvalidId, got {:?}", other),
        }
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = RivalId::new("9");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"9\"");
        let back: RivalId = serde_json::from_str("\"9\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ids_order_lexicographically() {
        let mut ids = vec![PlayerId::from("b"), PlayerId::from("a"), PlayerId::from("c")];
        ids.sort();
        assert_eq!(ids, vec![PlayerId::from("a"), PlayerId::from("b"), PlayerId::from("c")]);
    }
}
