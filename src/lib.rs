//! Formula 1 Dashboard Library
//!
//! Fetches driver standings, the race calendar and the last race results from
//! an Ergast-compatible API and renders them as terminal views. Requests for
//! the current season fall back to earlier seasons when it has no data yet.
//!
//! # Examples
//!
//! ```rust,no_run
//! use f1_dashboard::config::Config;
//! use f1_dashboard::data_fetcher::{F1Client, Fetched};
//! use f1_dashboard::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = F1Client::new(Config::load().await?)?;
//!
//!     match client.driver_standings(None).await {
//!         Fetched::Data { season, value, .. } => {
//!             for standing in value.iter().take(5) {
//!                 println!("{season} P{} {}", standing.position, standing.driver.full_name());
//!             }
//!         }
//!         Fetched::NoData { requested } => println!("No standings for {requested}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{DriverStanding, Fetched, RaceEvent, RaceResult};
pub use data_fetcher::{F1Client, season_plan};
pub use error::AppError;
pub use ui::{Dashboard, DashboardView, RenderOptions};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
