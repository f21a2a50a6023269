use super::Config;
use crate::constants::refresh::MIN_INTERVAL_SECONDS;
use crate::error::AppError;
use std::path::Path;

fn validate_base_url(label: &str, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{label} must start with http:// or https://, got '{url}'"
        )));
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Base URLs must be non-empty http(s) URLs
/// - HTTP timeout must be positive
/// - Minimum season must be a plausible championship year
/// - Refresh interval cannot be shorter than the minimum polling interval
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_base_url("API base URL", &config.api_base_url)?;
    if let Some(fallback_url) = &config.fallback_api_base_url {
        validate_base_url("Fallback API base URL", fallback_url)?;
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if config.min_season < 1900 {
        return Err(AppError::config_error(format!(
            "Minimum season {} is not a valid championship year",
            config.min_season
        )));
    }

    if config.refresh_interval_seconds < MIN_INTERVAL_SECONDS {
        return Err(AppError::config_error(format!(
            "Refresh interval must be at least {MIN_INTERVAL_SECONDS} seconds"
        )));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
