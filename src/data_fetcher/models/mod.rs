pub mod fetched;
pub mod results;
pub mod schedule;
pub mod standings;
pub mod upstream;

pub use fetched::Fetched;
pub use results::{AverageSpeed, FastestLap, RaceResult, ResultDriver, ResultEntry};
pub use schedule::{Circuit, RaceEvent, next_race};
pub use standings::{Constructor, Driver, DriverStanding};
pub use upstream::{RaceEnvelope, StandingsEnvelope};
