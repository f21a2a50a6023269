use crate::cli::Args;
use f1_dashboard::config::Config;
use f1_dashboard::constants::APP_NAME;
use f1_dashboard::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds the filter for one output layer: `RUST_LOG` if set, plus this
/// crate at `info` (or `debug` with `--debug`).
fn crate_filter(debug: bool) -> Result<EnvFilter, AppError> {
    let level = if debug { "debug" } else { "info" };
    let directive = format!("{APP_NAME}={level}")
        .parse::<Directive>()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a log file path into directory and file name, defaulting to
/// `<config_dir>/f1_dashboard/logs/f1_dashboard.log`.
fn resolve_log_location(custom_path: Option<&String>) -> (String, String) {
    let default_file_name = format!("{APP_NAME}.log");
    match custom_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(&default_file_name);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), default_file_name),
    }
}

/// Sets up logging for the application.
///
/// - Always logs to a daily rolling file
/// - Also logs to stdout with `--debug`, except in watch mode where the
///   terminal belongs to the dashboard
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // The config file may name a log path; a broken config is reported later
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = resolve_log_location(custom_log_path);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(crate_filter(args.debug)?);

    let stdout_layer = (args.debug && !args.watch).then(|| {
        fmt::Layer::new()
            .with_writer(stdout)
            .with_ansi(!args.plain)
    });
    let stdout_layer = match stdout_layer {
        Some(layer) => Some(layer.with_filter(crate_filter(true)?)),
        None => None,
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_custom_log_location() {
        let custom = "/tmp/f1/dashboard.log".to_string();
        let (dir, file) = resolve_log_location(Some(&custom));
        assert_eq!(dir, "/tmp/f1");
        assert_eq!(file, "dashboard.log");

        let bare = "dashboard.log".to_string();
        let (dir, file) = resolve_log_location(Some(&bare));
        assert_eq!(dir, ".");
        assert_eq!(file, "dashboard.log");
    }

    #[test]
    fn test_resolve_default_log_location() {
        let (dir, file) = resolve_log_location(None);
        assert!(dir.ends_with("logs"));
        assert_eq!(file, "f1_dashboard.log");
    }

    #[test]
    fn test_crate_filter_builds() {
        assert!(crate_filter(false).is_ok());
        assert!(crate_filter(true).is_ok());
    }
}
