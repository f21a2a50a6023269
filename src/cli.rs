use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use f1_dashboard::DashboardView;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the arguments change the stored config instead of showing views.
pub fn is_config_update(args: &Args) -> bool {
    args.new_base_url.is_some() || args.new_fallback_url.is_some() || args.clear_fallback_url
}

/// Formula 1 Dashboard
///
/// Shows the drivers' championship, the last race classification and the
/// race calendar. Before the current season has any results the previous
/// season is shown instead.
///
/// With --watch the dashboard redraws every refresh interval until Ctrl-C.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Which view to show.
    #[arg(value_enum, default_value_t = DashboardView::All)]
    pub view: DashboardView,

    /// Season to show. Defaults to the current season, falling back to the
    /// previous one while the current season has no data.
    #[arg(long, short = 's', help_heading = "Display Options")]
    pub season: Option<i32>,

    /// Show every row instead of the top 5 standings and top 10 results.
    #[arg(long, short = 'a', help_heading = "Display Options")]
    pub all: bool,

    /// Disable colors. Useful for scripts and terminals without ANSI support.
    #[arg(long, short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Keep running and refresh the views periodically until Ctrl-C.
    #[arg(long, short = 'w', help_heading = "Watch Mode")]
    pub watch: bool,

    /// Refresh interval in seconds for --watch (default from config, 300).
    #[arg(long, value_name = "SECS", help_heading = "Watch Mode")]
    pub interval: Option<u64>,

    /// Set the primary API base URL in config.
    #[arg(long = "set-base-url", value_name = "URL", help_heading = "Configuration")]
    pub new_base_url: Option<String>,

    /// Set the alternate API base URL tried when the primary one fails.
    #[arg(long = "set-fallback-url", value_name = "URL", help_heading = "Configuration")]
    pub new_fallback_url: Option<String>,

    /// Remove the alternate API base URL from config.
    #[arg(long = "clear-fallback-url", help_heading = "Configuration")]
    pub clear_fallback_url: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: debug level logs, also printed to the terminal
    /// outside watch mode, and no screen clearing between refreshes.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
