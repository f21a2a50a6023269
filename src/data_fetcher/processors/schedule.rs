use super::{parse_date, parse_i32, parse_time, parse_u32};
use crate::data_fetcher::models::upstream::{ApiRace, RaceEnvelope};
use crate::data_fetcher::models::{Circuit, RaceEvent};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Converts one upstream race, ignoring any attached results.
pub(crate) fn process_race_event(
    race: &ApiRace,
    fetched_at: DateTime<Utc>,
    url: &str,
) -> Result<RaceEvent, AppError> {
    Ok(RaceEvent {
        season: parse_i32("season", &race.season, url)?,
        round: parse_u32("round", &race.round, url)?,
        name: race.race_name.clone(),
        date: parse_date(&race.date, url)?,
        time: parse_time(race.time.as_deref()),
        circuit: Circuit {
            id: race.circuit.circuit_id.clone(),
            name: race.circuit.circuit_name.clone(),
            locality: race.circuit.location.locality.clone(),
            country: race.circuit.location.country.clone(),
        },
        fetched_at,
    })
}

/// Maps a season race table to `RaceEvent`s in upstream order.
pub fn process_race_schedule(
    envelope: RaceEnvelope,
    fetched_at: DateTime<Utc>,
    url: &str,
) -> Result<Option<Vec<RaceEvent>>, AppError> {
    let races = envelope.mr_data.race_table.races;
    if races.is_empty() {
        return Ok(None);
    }

    debug!("Normalizing {} races from {url}", races.len());

    races
        .iter()
        .map(|race| process_race_event(race, fetched_at, url))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Highest round number in a season race table.
///
/// The API lists races in round order today, but the maximum is taken
/// explicitly so ordering changes cannot pick the wrong race.
pub fn latest_round(envelope: &RaceEnvelope, url: &str) -> Result<Option<u32>, AppError> {
    let mut latest = None;
    for race in &envelope.mr_data.race_table.races {
        let round = parse_u32("round", &race.round, url)?;
        latest = latest.max(Some(round));
    }
    Ok(latest)
}
