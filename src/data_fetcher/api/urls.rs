//! URL building utilities for API endpoints
//!
//! Builders return the path relative to a base URL so the same path can be
//! tried against the primary and the alternate transport.

/// Path of the drivers' championship standings for a season.
///
/// # Example
/// ```
/// use f1_dashboard::data_fetcher::api::driver_standings_path;
///
/// assert_eq!(driver_standings_path(2024), "f1/2024/driverStandings.json");
/// ```
pub fn driver_standings_path(season: i32) -> String {
    format!("f1/{season}/driverStandings.json")
}

/// Path of the race calendar for a season.
///
/// # Example
/// ```
/// use f1_dashboard::data_fetcher::api::season_schedule_path;
///
/// assert_eq!(season_schedule_path(2024), "f1/2024.json");
/// ```
pub fn season_schedule_path(season: i32) -> String {
    format!("f1/{season}.json")
}

/// Path of the classification for one round.
///
/// # Example
/// ```
/// use f1_dashboard::data_fetcher::api::race_results_path;
///
/// assert_eq!(race_results_path(2023, 22), "f1/2023/22/results.json");
/// ```
pub fn race_results_path(season: i32, round: u32) -> String {
    format!("f1/{season}/{round}/results.json")
}

/// Joins a base URL and an endpoint path with exactly one slash.
pub fn build_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
