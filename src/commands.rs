use crate::cli::Args;
use f1_dashboard::config::Config;
use f1_dashboard::constants::{fallback::DEFAULT_MIN_SEASON, refresh::MIN_INTERVAL_SECONDS};
use f1_dashboard::error::AppError;
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_fallback_url.is_some() && args.clear_fallback_url {
        return Err(AppError::config_error(
            "Cannot use both --set-fallback-url and --clear-fallback-url",
        ));
    }

    if let Some(interval) = args.interval {
        if !args.watch {
            return Err(AppError::config_error("--interval requires --watch"));
        }
        if interval < MIN_INTERVAL_SECONDS {
            return Err(AppError::config_error(format!(
                "Refresh interval must be at least {MIN_INTERVAL_SECONDS} seconds"
            )));
        }
    }

    if let Some(season) = args.season
        && season < DEFAULT_MIN_SEASON
    {
        return Err(AppError::config_error(format!(
            "Season {season} predates the first championship ({DEFAULT_MIN_SEASON})"
        )));
    }

    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-base-url, --set-fallback-url,
/// --clear-fallback-url).
///
/// Starts from the stored config (or defaults), applies the changes and
/// saves after validating the result.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_updates(&mut config, args);
    config.validate()?;

    config.save().await?;
    info!("Saved configuration to {config_path}");
    println!("Config updated successfully!");

    Ok(())
}

fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(base_url) = &args.new_base_url {
        config.api_base_url = base_url.clone();
    }

    if let Some(fallback_url) = &args.new_fallback_url {
        config.fallback_api_base_url = Some(fallback_url.clone());
    } else if args.clear_fallback_url {
        config.fallback_api_base_url = None;
        println!("Fallback API base URL cleared.");
    }
}
