//! Loosely typed match records as stored by the club application.
//!
//! Identifiers may arrive as numbers or strings, numeric fields may be
//! fractional or negative, and tags are free text. Nothing here is trusted;
//! [`super::normalize_match`] turns these into strict [`crate::models`].

use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

/// Accept an id as a JSON string or number; blank strings and `null` are absent.
fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Deserialize::deserialize(deserializer)?;
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Accept a number or a numeric string; anything else is absent.
fn de_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatch {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub team_id: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub rival_id: Option<String>,
    #[serde(default)]
    pub is_home: Option<bool>,
    /// ISO-8601 text or epoch milliseconds.
    #[serde(default)]
    pub kickoff: Option<Value>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub matchday: Option<f64>,
    #[serde(default)]
    pub lineup: Vec<RawLineupSlot>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
    #[serde(default, alias = "opponentNotes")]
    pub notes: Option<String>,
    #[serde(default)]
    pub finished: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLineupSlot {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub player_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub number: Option<f64>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub minutes: Option<f64>,
    #[serde(default)]
    pub clean_sheet: Option<bool>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub goals_conceded: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub match_id: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub minute: Option<f64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub player_id: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub team_id: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub rival_id: Option<String>,
}

/// Unwrap the record list of a match file: either a bare array or a
/// `{"matches": [...]}` envelope. Records stay untyped so each one can be
/// deserialized, and reported, on its own.
pub fn match_records(file: Value) -> Result<Vec<Value>, serde_json::Error> {
    match file {
        Value::Array(records) => Ok(records),
        Value::Object(mut envelope) => match envelope.remove("matches") {
            Some(Value::Array(records)) => Ok(records),
            Some(other) => Err(serde_json::Error::custom(format!(
                "expected \"matches\" to be an array, got {}",
                other
            ))),
            None => Err(serde_json::Error::custom(
                "expected an array of matches or a {\"matches\": [...]} object",
            )),
        },
        other => Err(serde_json::Error::custom(format!(
            "expected an array of matches or a {{\"matches\": [...]}} object, got {}",
            other
        ))),
    }
}
