use super::schedule::process_race_event;
use super::{ensure_unique_positions, parse_f64, parse_u32};
use crate::data_fetcher::models::upstream::{ApiFastestLap, ApiResult, RaceEnvelope};
use crate::data_fetcher::models::{
    AverageSpeed, FastestLap, RaceResult, ResultDriver, ResultEntry,
};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use tracing::debug;

fn process_fastest_lap(lap: ApiFastestLap, url: &str) -> Result<FastestLap, AppError> {
    let rank = lap
        .rank
        .as_deref()
        .map(|rank| parse_u32("fastest lap rank", rank, url))
        .transpose()?;
    let average_speed = lap
        .average_speed
        .map(|speed| -> Result<AverageSpeed, AppError> {
            Ok(AverageSpeed {
                value: parse_f64("average speed", &speed.speed, url)?,
                units: speed.units,
            })
        })
        .transpose()?;

    Ok(FastestLap {
        rank,
        lap: parse_u32("fastest lap number", &lap.lap, url)?,
        time: lap.time.map(|t| t.time),
        average_speed,
    })
}

fn process_result_entry(result: ApiResult, url: &str) -> Result<ResultEntry, AppError> {
    Ok(ResultEntry {
        position: parse_u32("position", &result.position, url)?,
        driver: ResultDriver {
            given_name: result.driver.given_name,
            family_name: result.driver.family_name,
            code: result.driver.code,
        },
        constructor_name: result.constructor.name,
        grid: parse_u32("grid", &result.grid, url)?,
        laps: parse_u32("laps", &result.laps, url)?,
        status: result.status,
        finish_time: result.time.map(|t| t.time),
        fastest_lap: result
            .fastest_lap
            .map(|lap| process_fastest_lap(lap, url))
            .transpose()?,
        points: parse_f64("points", &result.points, url)?,
    })
}

/// Maps a per-round results response to a `RaceResult`.
///
/// Returns `Ok(None)` when the round has no race entry or no classified
/// results yet, which is the normal state for a round that has not been run.
pub fn process_race_result(
    envelope: RaceEnvelope,
    fetched_at: DateTime<Utc>,
    url: &str,
) -> Result<Option<RaceResult>, AppError> {
    let Some(mut race) = envelope.mr_data.race_table.races.into_iter().next() else {
        return Ok(None);
    };

    if race.results.is_empty() {
        return Ok(None);
    }

    let results = std::mem::take(&mut race.results);
    debug!(
        "Normalizing {} results for {} ({})",
        results.len(),
        race.race_name,
        url
    );

    let event = process_race_event(&race, fetched_at, url)?;
    let entries = results
        .into_iter()
        .map(|result| process_result_entry(result, url))
        .collect::<Result<Vec<_>, _>>()?;

    ensure_unique_positions(entries.iter().map(|e| e.position), url)?;

    Ok(Some(RaceResult {
        race: event,
        results: entries,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.example.com/f1/2023/22/results.json";

    const RESULTS_JSON: &str = r#"{
        "MRData": {"RaceTable": {"season": "2023", "round": "22", "Races": [{
            "season": "2023", "round": "22", "raceName": "Abu Dhabi Grand Prix",
            "date": "2023-11-26", "time": "13:00:00Z",
            "Circuit": {"circuitId": "yas_marina", "circuitName": "Yas Marina Circuit",
                "Location": {"lat": "24.4672", "long": "54.6031", "locality": "Abu Dhabi", "country": "UAE"}},
            "Results": [
                {"number": "1", "position": "1", "positionText": "1", "points": "26",
                 "Driver": {"driverId": "max_verstappen", "code": "VER", "givenName": "Max", "familyName": "Verstappen"},
                 "Constructor": {"constructorId": "red_bull", "name": "Red Bull"},
                 "grid": "1", "laps": "58", "status": "Finished",
                 "Time": {"millis": "5204817", "time": "1:27:02.624"},
                 "FastestLap": {"rank": "1", "lap": "44", "Time": {"time": "1:26.993"},
                    "AverageSpeed": {"units": "kph", "speed": "218.532"}}},
                {"number": "2", "position": "2", "positionText": "2", "points": "18",
                 "Driver": {"driverId": "leclerc", "code": "LEC", "givenName": "Charles", "familyName": "Leclerc"},
                 "Constructor": {"constructorId": "ferrari", "name": "Ferrari"},
                 "grid": "2", "laps": "58", "status": "Finished",
                 "Time": {"millis": "5222346", "time": "+17.993"},
                 "FastestLap": {"lap": "41"}},
                {"number": "2", "position": "20", "positionText": "R", "points": "0",
                 "Driver": {"driverId": "sargeant", "givenName": "Logan", "familyName": "Sargeant"},
                 "Constructor": {"constructorId": "williams", "name": "Williams"},
                 "grid": "0", "laps": "56", "status": "+2 Laps"}
            ]
        }]}}
    }"#;

    #[test]
    fn test_process_race_result_maps_fields() {
        let envelope: RaceEnvelope = serde_json::from_str(RESULTS_JSON).unwrap();
        let result = process_race_result(envelope, Utc::now(), URL)
            .unwrap()
            .unwrap();

        assert_eq!(result.race.season, 2023);
        assert_eq!(result.race.round, 22);
        assert_eq!(result.race.name, "Abu Dhabi Grand Prix");
        assert_eq!(result.results.len(), 3);

        let winner = &result.results[0];
        assert_eq!(winner.position, 1);
        assert_eq!(winner.driver.code.as_deref(), Some("VER"));
        assert_eq!(winner.constructor_name, "Red Bull");
        assert_eq!(winner.points, 26.0);
        assert_eq!(winner.finish_time.as_deref(), Some("1:27:02.624"));
        let fastest = winner.fastest_lap.as_ref().unwrap();
        assert_eq!(fastest.rank, Some(1));
        assert_eq!(fastest.lap, 44);
        assert_eq!(fastest.time.as_deref(), Some("1:26.993"));
        let speed = fastest.average_speed.as_ref().unwrap();
        assert_eq!(speed.value, 218.532);
        assert_eq!(speed.units, "kph");
    }

    #[test]
    fn test_optional_fields_stay_absent() {
        let envelope: RaceEnvelope = serde_json::from_str(RESULTS_JSON).unwrap();
        let result = process_race_result(envelope, Utc::now(), URL)
            .unwrap()
            .unwrap();

        let second = &result.results[1];
        let lap = second.fastest_lap.as_ref().unwrap();
        assert_eq!(lap.rank, None);
        assert_eq!(lap.time, None);
        assert_eq!(lap.average_speed, None);

        let non_finisher = &result.results[2];
        assert_eq!(non_finisher.finish_time, None);
        assert_eq!(non_finisher.fastest_lap, None);
        assert_eq!(non_finisher.driver.code, None);
        assert_eq!(non_finisher.grid, 0);
    }

    #[test]
    fn test_round_without_results_is_none() {
        let no_races = r#"{"MRData": {"RaceTable": {"season": "2025", "round": "24", "Races": []}}}"#;
        let envelope: RaceEnvelope = serde_json::from_str(no_races).unwrap();
        assert!(process_race_result(envelope, Utc::now(), URL).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_positions_are_malformed() {
        let duplicated = RESULTS_JSON.replace(r#""position": "20""#, r#""position": "2""#);
        let envelope: RaceEnvelope = serde_json::from_str(&duplicated).unwrap();
        assert!(matches!(
            process_race_result(envelope, Utc::now(), URL),
            Err(AppError::ApiUnexpectedStructure { .. })
        ));
    }
}
