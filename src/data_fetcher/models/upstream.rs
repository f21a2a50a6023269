//! Wire shapes of the Ergast-compatible API.
//!
//! Every response is wrapped in an `MRData` envelope and numeric fields arrive
//! as JSON strings. These types mirror that layout one-to-one; conversion into
//! the dashboard models happens in `processors`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsEnvelope {
    #[serde(rename = "MRData")]
    pub mr_data: StandingsData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsData {
    #[serde(rename = "StandingsTable")]
    pub standings_table: StandingsTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsTable {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<StandingsList>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsList {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<ApiDriverStanding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDriverStanding {
    pub position: String,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Driver")]
    pub driver: ApiDriver,
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<ApiConstructor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDriver {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConstructor {
    #[serde(rename = "constructorId")]
    pub constructor_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceEnvelope {
    #[serde(rename = "MRData")]
    pub mr_data: RaceData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceData {
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceTable {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(rename = "Races", default)]
    pub races: Vec<ApiRace>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRace {
    pub season: String,
    pub round: String,
    #[serde(rename = "raceName")]
    pub race_name: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(rename = "Circuit")]
    pub circuit: ApiCircuit,
    /// Present only on the per-round results endpoint.
    #[serde(rename = "Results", default)]
    pub results: Vec<ApiResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCircuit {
    #[serde(rename = "circuitId")]
    pub circuit_id: String,
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
    #[serde(rename = "Location")]
    pub location: ApiLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiLocation {
    pub locality: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResult {
    pub position: String,
    pub points: String,
    #[serde(rename = "Driver")]
    pub driver: ApiDriver,
    #[serde(rename = "Constructor")]
    pub constructor: ApiConstructor,
    pub grid: String,
    pub laps: String,
    pub status: String,
    #[serde(rename = "Time", default)]
    pub time: Option<ApiTime>,
    #[serde(rename = "FastestLap", default)]
    pub fastest_lap: Option<ApiFastestLap>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTime {
    #[serde(default)]
    pub millis: Option<String>,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFastestLap {
    #[serde(default)]
    pub rank: Option<String>,
    pub lap: String,
    #[serde(rename = "Time", default)]
    pub time: Option<ApiTime>,
    #[serde(rename = "AverageSpeed", default)]
    pub average_speed: Option<ApiAverageSpeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiAverageSpeed {
    pub units: String,
    pub speed: String,
}
