//! Output helpers shared across commands.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::Result;

/// Print a report as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}

/// Kickoff date for text output; undated matches print as dashes.
pub fn format_kickoff(kickoff: Option<DateTime<Utc>>) -> String {
    kickoff
        .map(|k| k.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "----------".to_string())
}

/// A [0, 1] rate as a percentage with one decimal.
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
