pub mod api;
pub mod models;
pub mod processors;

pub use api::{F1Client, season_plan};
pub use models::{DriverStanding, Fetched, RaceEvent, RaceResult};
