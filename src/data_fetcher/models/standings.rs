use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub given_name: String,
    pub family_name: String,
    pub nationality: Option<String>,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    pub id: String,
    pub name: String,
}

/// One row of the drivers' championship table.
///
/// A driver who changed teams mid-season carries only the first constructor
/// the upstream lists for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStanding {
    pub position: u32,
    pub points: f64,
    pub wins: u32,
    pub driver: Driver,
    pub constructor: Constructor,
    /// Season that was actually served, which may precede the one requested.
    pub season: i32,
    pub fetched_at: DateTime<Utc>,
}
