use crate::cli::Args;
use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType, SetTitle},
};
use f1_dashboard::config::Config;
use f1_dashboard::data_fetcher::F1Client;
use f1_dashboard::error::AppError;
use f1_dashboard::ui::{Dashboard, RenderOptions};
use std::io::{Write, stdout};
use std::time::Duration;
use tracing::info;

const TERMINAL_TITLE: &str = "F1 DASHBOARD";

fn render_options(args: &Args) -> RenderOptions {
    RenderOptions {
        show_all: args.all,
        plain: args.plain,
        today: Local::now().date_naive(),
    }
}

/// Fetches the selected views once, prints them and exits.
pub async fn run_once(args: &Args, config: Config) -> Result<(), AppError> {
    let client = F1Client::new(config)?;
    let mut dashboard = Dashboard::new(args.view, args.season);

    dashboard.refresh(&client).await;

    let mut out = stdout().lock();
    dashboard.render(&mut out, &render_options(args))?;
    out.flush()?;
    Ok(())
}

/// Redraws the dashboard every refresh interval until Ctrl-C.
///
/// Each tick first redraws with the views marked as refreshing, then again
/// once the fetches land.
pub async fn run_watch(args: &Args, config: Config) -> Result<(), AppError> {
    let interval_seconds = args.interval.unwrap_or(config.refresh_interval_seconds);
    let client = F1Client::new(config)?;
    let mut dashboard = Dashboard::new(args.view, args.season);

    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    info!("Watch mode: refreshing every {interval_seconds}s");

    let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let ticket = dashboard.begin_refresh();
                draw(&dashboard, args)?;
                dashboard.complete_refresh(&client, ticket).await;
                draw(&dashboard, args)?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl-C, leaving watch mode");
                break;
            }
        }
    }

    Ok(())
}

fn draw(dashboard: &Dashboard, args: &Args) -> Result<(), AppError> {
    let mut out = stdout().lock();

    // Debug mode keeps earlier frames on screen
    if !args.debug {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }

    dashboard.render(&mut out, &render_options(args))?;
    out.flush()?;
    Ok(())
}
