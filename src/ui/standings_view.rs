use std::io::Write;

use super::colors::*;
use super::page::{RenderOptions, render_hidden_rows_hint, render_view};
use super::painter::{Painter, fit_left, fit_right, format_points};
use super::view_state::ViewState;
use crate::constants::display::STANDINGS_COLLAPSED_ROWS;
use crate::data_fetcher::models::DriverStanding;
use crate::error::AppError;

const DRIVER_WIDTH: usize = 22;
const TEAM_WIDTH: usize = 18;

/// Renders the drivers' championship table.
pub fn render_standings<W: Write>(
    out: &mut W,
    state: &ViewState<Vec<DriverStanding>>,
    options: &RenderOptions,
) -> Result<(), AppError> {
    render_view(out, "DRIVER STANDINGS", state, options, |painter, standings| {
        render_table(painter, standings, options.show_all)
    })
}

fn render_table<W: Write>(
    painter: &mut Painter<'_, W>,
    standings: &[DriverStanding],
    show_all: bool,
) -> Result<(), AppError> {
    let visible = if show_all {
        standings.len()
    } else {
        standings.len().min(STANDINGS_COLLAPSED_ROWS)
    };

    painter.styled(
        subheader_fg(),
        &format!(
            "{} {} {} {} {}",
            fit_right("POS", 3),
            fit_left("DRIVER", DRIVER_WIDTH),
            fit_left("TEAM", TEAM_WIDTH),
            fit_right("PTS", 6),
            fit_right("WINS", 4)
        ),
    )?;
    painter.newline()?;

    for standing in &standings[..visible] {
        painter.styled(
            podium_fg(standing.position),
            &fit_right(&standing.position.to_string(), 3),
        )?;
        painter.text(" ")?;
        painter.styled(text_fg(), &fit_left(&standing.driver.full_name(), DRIVER_WIDTH))?;
        painter.text(" ")?;
        painter.styled(text_fg(), &fit_left(&standing.constructor.name, TEAM_WIDTH))?;
        painter.text(" ")?;
        painter.styled(points_fg(), &fit_right(&format_points(standing.points), 6))?;
        painter.text(" ")?;
        painter.styled(text_fg(), &fit_right(&standing.wins.to_string(), 4))?;
        painter.newline()?;
    }

    render_hidden_rows_hint(painter, standings.len() - visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{Constructor, Driver};
    use chrono::{Local, NaiveDate, Utc};

    fn standing(position: u32, family_name: &str, points: f64) -> DriverStanding {
        DriverStanding {
            position,
            points,
            wins: if position == 1 { 3 } else { 0 },
            driver: Driver {
                id: family_name.to_lowercase(),
                given_name: "Test".to_string(),
                family_name: family_name.to_string(),
                nationality: None,
            },
            constructor: Constructor {
                id: "team".to_string(),
                name: "Team".to_string(),
            },
            season: 2024,
            fetched_at: Utc::now(),
        }
    }

    fn options(show_all: bool) -> RenderOptions {
        RenderOptions {
            show_all,
            plain: true,
            today: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    fn render(state: &ViewState<Vec<DriverStanding>>, show_all: bool) -> String {
        let mut buffer = Vec::new();
        render_standings(&mut buffer, state, &options(show_all)).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn ready(standings: Vec<DriverStanding>, notice: Option<&str>) -> ViewState<Vec<DriverStanding>> {
        ViewState::Ready {
            data: standings,
            last_updated: Local::now(),
            notice: notice.map(str::to_string),
        }
    }

    #[test]
    fn test_collapsed_table_shows_top_five() {
        let standings: Vec<_> = (1..=8)
            .map(|p| standing(p, &format!("Driver{p}"), 100.0 - p as f64))
            .collect();
        let output = render(&ready(standings, None), false);

        assert!(output.contains("Driver5"));
        assert!(!output.contains("Driver6"));
        assert!(output.contains("3 more (use --all)"));
    }

    #[test]
    fn test_show_all_lists_every_driver() {
        let standings: Vec<_> = (1..=8)
            .map(|p| standing(p, &format!("Driver{p}"), 100.0 - p as f64))
            .collect();
        let output = render(&ready(standings, None), true);

        assert!(output.contains("Driver8"));
        assert!(!output.contains("more (use --all)"));
    }

    #[test]
    fn test_points_and_notice() {
        let output = render(
            &ready(vec![standing(1, "Verstappen", 437.5)], Some("Showing data from 2024 season")),
            false,
        );
        assert!(output.contains("Showing data from 2024 season"));
        assert!(output.contains("Test Verstappen"));
        assert!(output.contains("437.5"));
    }

    #[test]
    fn test_unavailable_and_loading_states() {
        let unavailable = ViewState::Unavailable {
            message: "Data unavailable for the 2025 season".to_string(),
        };
        assert!(render(&unavailable, false).contains("Data unavailable"));
        assert!(render(&ViewState::Loading, false).contains("Loading..."));
    }
}
