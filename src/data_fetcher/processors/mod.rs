//! Normalizers that turn upstream envelopes into dashboard models.
//!
//! Every function returns `Ok(None)` for a well-formed but empty payload and
//! `AppError::ApiUnexpectedStructure` when a required field cannot be
//! interpreted. Callers fold both into the season fallback.

pub mod results;
pub mod schedule;
pub mod standings;

pub use results::process_race_result;
pub use schedule::{latest_round, process_race_schedule};
pub use standings::process_driver_standings;

use crate::error::AppError;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashSet;
use tracing::warn;

/// Parses an integer field the API delivers as a JSON string.
pub(crate) fn parse_u32(field: &str, value: &str, url: &str) -> Result<u32, AppError> {
    value.trim().parse::<u32>().map_err(|_| {
        AppError::api_unexpected_structure(format!("{field} is not an integer: '{value}'"), url)
    })
}

pub(crate) fn parse_i32(field: &str, value: &str, url: &str) -> Result<i32, AppError> {
    value.trim().parse::<i32>().map_err(|_| {
        AppError::api_unexpected_structure(format!("{field} is not an integer: '{value}'"), url)
    })
}

/// Parses a decimal field such as points or average speed.
pub(crate) fn parse_f64(field: &str, value: &str, url: &str) -> Result<f64, AppError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            AppError::api_unexpected_structure(format!("{field} is not a number: '{value}'"), url)
        })
}

pub(crate) fn parse_date(value: &str, url: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::api_unexpected_structure(format!("invalid race date '{value}': {e}"), url)
    })
}

/// Parses an upstream start time like `13:00:00Z`.
///
/// An unreadable time is logged and dropped rather than failing the whole
/// schedule; the date alone is still enough to place the race.
pub(crate) fn parse_time(value: Option<&str>) -> Option<NaiveTime> {
    let raw = value?.trim();
    let trimmed = raw.trim_end_matches('Z');
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|e| warn!("Ignoring unparseable race time '{raw}': {e}"))
        .ok()
}

/// Rejects classification lists that repeat a position.
pub(crate) fn ensure_unique_positions(
    positions: impl IntoIterator<Item = u32>,
    url: &str,
) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for position in positions {
        if !seen.insert(position) {
            return Err(AppError::api_unexpected_structure(
                format!("position {position} appears more than once"),
                url,
            ));
        }
    }
    Ok(())
}
