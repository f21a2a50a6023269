// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_update};
use f1_dashboard::config::Config;
use f1_dashboard::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if args.watch {
        app::run_watch(&args, config).await
    } else {
        app::run_once(&args, config).await
    }
}
