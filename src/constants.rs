//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Ergast-compatible endpoint served by Jolpica
pub const DEFAULT_API_BASE_URL: &str = "https://api.jolpi.ca/ergast";

/// Name used for the config directory and the default log file
pub const APP_NAME: &str = "f1_dashboard";

/// Season fallback bounds
pub mod fallback {
    /// How many seasons before the current one may be tried when the
    /// current season has no data
    pub const DEFAULT_MAX_FALLBACK_SEASONS: u32 = 1;

    /// The first Formula 1 world championship season
    pub const DEFAULT_MIN_SEASON: i32 = 1950;
}

/// Refresh timing for watch mode
pub mod refresh {
    /// Default polling interval (5 minutes)
    pub const DEFAULT_INTERVAL_SECONDS: u64 = 300;

    /// Shortest interval accepted from the command line or config
    pub const MIN_INTERVAL_SECONDS: u64 = 30;
}

/// How many rows the views show before "show all" is requested
pub mod display {
    /// Drivers shown in the collapsed standings view
    pub const STANDINGS_COLLAPSED_ROWS: usize = 5;

    /// Classified drivers shown in the collapsed results view
    pub const RESULTS_COLLAPSED_ROWS: usize = 10;

    /// Entries in the podium summary
    pub const PODIUM_SIZE: usize = 3;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API base URL override
    pub const API_BASE_URL: &str = "F1_API_BASE_URL";

    /// Environment variable for the alternate API base URL
    pub const FALLBACK_API_BASE_URL: &str = "F1_FALLBACK_API_BASE_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "F1_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "F1_HTTP_TIMEOUT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_constants_are_reasonable() {
        let min_season = fallback::DEFAULT_MIN_SEASON;
        assert!(fallback::DEFAULT_MAX_FALLBACK_SEASONS >= 1);
        assert!((1950..2000).contains(&min_season));
    }

    #[test]
    fn test_refresh_constants_are_reasonable() {
        let default = refresh::DEFAULT_INTERVAL_SECONDS;
        let min = refresh::MIN_INTERVAL_SECONDS;
        assert!(min > 0);
        assert!(default >= min);
    }

    #[test]
    fn test_display_constants_are_reasonable() {
        let standings = display::STANDINGS_COLLAPSED_ROWS;
        let results = display::RESULTS_COLLAPSED_ROWS;
        let podium = display::PODIUM_SIZE;
        assert!(podium <= standings);
        assert!(standings <= results);
    }

    #[test]
    fn test_env_var_names_are_not_empty() {
        let names = [
            env_vars::API_BASE_URL,
            env_vars::FALLBACK_API_BASE_URL,
            env_vars::LOG_FILE,
            env_vars::HTTP_TIMEOUT,
        ];
        for name in names {
            assert!(name.starts_with("F1_"));
        }
    }
}
