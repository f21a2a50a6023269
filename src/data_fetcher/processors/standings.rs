use super::{ensure_unique_positions, parse_f64, parse_u32};
use crate::data_fetcher::models::upstream::{ApiDriverStanding, StandingsEnvelope};
use crate::data_fetcher::models::{Constructor, Driver, DriverStanding};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use tracing::debug;

fn process_standing(
    standing: ApiDriverStanding,
    season: i32,
    fetched_at: DateTime<Utc>,
    url: &str,
) -> Result<DriverStanding, AppError> {
    let driver_id = standing.driver.driver_id.clone();
    let constructor = standing.constructors.into_iter().next().ok_or_else(|| {
        AppError::api_unexpected_structure(
            format!("driver {driver_id} has no constructor"),
            url,
        )
    })?;

    Ok(DriverStanding {
        position: parse_u32("position", &standing.position, url)?,
        points: parse_f64("points", &standing.points, url)?,
        wins: parse_u32("wins", &standing.wins, url)?,
        driver: Driver {
            id: standing.driver.driver_id,
            given_name: standing.driver.given_name,
            family_name: standing.driver.family_name,
            nationality: standing.driver.nationality,
        },
        constructor: Constructor {
            id: constructor.constructor_id,
            name: constructor.name,
        },
        season,
        fetched_at,
    })
}

/// Maps the first standings list of a season to `DriverStanding`s.
///
/// `season` is the season the request was made for; every row carries it.
pub fn process_driver_standings(
    envelope: StandingsEnvelope,
    season: i32,
    fetched_at: DateTime<Utc>,
    url: &str,
) -> Result<Option<Vec<DriverStanding>>, AppError> {
    let Some(list) = envelope
        .mr_data
        .standings_table
        .standings_lists
        .into_iter()
        .next()
    else {
        return Ok(None);
    };

    if list.driver_standings.is_empty() {
        return Ok(None);
    }

    debug!(
        "Normalizing {} driver standings for season {} (after round {:?})",
        list.driver_standings.len(),
        season,
        list.round
    );

    let standings = list
        .driver_standings
        .into_iter()
        .map(|standing| process_standing(standing, season, fetched_at, url))
        .collect::<Result<Vec<_>, _>>()?;

    ensure_unique_positions(standings.iter().map(|s| s.position), url)?;

    Ok(Some(standings))
}
