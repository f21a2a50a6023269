use super::schedule::RaceEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDriver {
    pub given_name: String,
    pub family_name: String,
    /// Three-letter code; absent for most pre-2014 drivers.
    pub code: Option<String>,
}

impl ResultDriver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageSpeed {
    pub value: f64,
    pub units: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastestLap {
    pub rank: Option<u32>,
    pub lap: u32,
    pub time: Option<String>,
    pub average_speed: Option<AverageSpeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub position: u32,
    pub driver: ResultDriver,
    pub constructor_name: String,
    pub grid: u32,
    pub laps: u32,
    pub status: String,
    /// Race time or gap to the winner; `None` for non-finishers.
    pub finish_time: Option<String>,
    pub fastest_lap: Option<FastestLap>,
    pub points: f64,
}

impl ResultEntry {
    /// Positions gained (positive) or lost since the start. A pit lane
    /// start is reported upstream as grid 0 and yields `None`.
    pub fn positions_gained(&self) -> Option<i64> {
        (self.grid > 0).then(|| i64::from(self.grid) - i64::from(self.position))
    }
}

/// Classification of the most recent scheduled round of a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub race: RaceEvent,
    pub results: Vec<ResultEntry>,
}

impl RaceResult {
    pub fn season(&self) -> i32 {
        self.race.season
    }

    pub fn podium(&self) -> &[ResultEntry] {
        let end = self.results.len().min(crate::constants::display::PODIUM_SIZE);
        &self.results[..end]
    }

    /// The entry holding fastest-lap rank 1, if the session recorded one.
    pub fn fastest_lap_holder(&self) -> Option<&ResultEntry> {
        self.results.iter().find(|entry| {
            entry
                .fastest_lap
                .as_ref()
                .is_some_and(|lap| lap.rank == Some(1))
        })
    }
}
