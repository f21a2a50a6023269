use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, env_vars, fallback, refresh,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Resolved once at startup and handed to the fetcher; nothing reads the
/// environment after that.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Primary Ergast-compatible base URL, e.g. `https://api.jolpi.ca/ergast`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Alternate transport tried when the primary base URL fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_api_base_url: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Number of earlier seasons tried when the current season has no data.
    #[serde(default = "default_max_fallback_seasons")]
    pub max_fallback_seasons: u32,
    /// Seasons older than this are never requested.
    #[serde(default = "default_min_season")]
    pub min_season: i32,
    /// Polling interval for watch mode.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_max_fallback_seasons() -> u32 {
    fallback::DEFAULT_MAX_FALLBACK_SEASONS
}

fn default_min_season() -> i32 {
    fallback::DEFAULT_MIN_SEASON
}

fn default_refresh_interval() -> u64 {
    refresh::DEFAULT_INTERVAL_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            fallback_api_base_url: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            max_fallback_seasons: default_max_fallback_seasons(),
            min_season: default_min_season(),
            refresh_interval_seconds: default_refresh_interval(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to built-in defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `F1_API_BASE_URL` - Override the primary base URL
    /// - `F1_FALLBACK_API_BASE_URL` - Override the alternate base URL
    /// - `F1_LOG_FILE` - Override log file path
    /// - `F1_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            debug!("Loading config from {config_path}");
            Self::load_from_path(&config_path).await?
        } else {
            info!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `F1_*` environment variable overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = base_url;
        }

        if let Ok(fallback_url) = std::env::var(env_vars::FALLBACK_API_BASE_URL) {
            self.fallback_api_base_url = Some(fallback_url);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// The base URLs to try, primary first.
    pub fn base_urls(&self) -> Vec<&str> {
        let mut urls = vec![self.api_base_url.as_str()];
        if let Some(fallback_url) = self.fallback_api_base_url.as_deref()
            && fallback_url != self.api_base_url
        {
            urls.push(fallback_url);
        }
        urls
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Built-in defaults are in use)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url);
        println!("────────────────────────────────────");
        println!("Fallback API Base URL:");
        println!(
            "{}",
            config.fallback_api_base_url.as_deref().unwrap_or("(none)")
        );
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Season Fallback:");
        println!(
            "up to {} season(s), never before {}",
            config.max_fallback_seasons, config.min_season
        );
        println!("────────────────────────────────────");
        println!("Refresh Interval:");
        println!("{} seconds", config.refresh_interval_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}.log", crate::constants::APP_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing
    /// slashes from the base URLs so paths can be appended verbatim.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let normalized = Config {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            fallback_api_base_url: self
                .fallback_api_base_url
                .as_deref()
                .map(|url| url.trim_end_matches('/').to_string()),
            ..self.clone()
        };
        let content = toml::to_string_pretty(&normalized)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
