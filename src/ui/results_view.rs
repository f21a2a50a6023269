use std::io::Write;

use super::colors::*;
use super::page::{RenderOptions, render_hidden_rows_hint, render_view};
use super::painter::{Painter, fit_left, fit_right, format_points};
use super::view_state::ViewState;
use crate::constants::display::RESULTS_COLLAPSED_ROWS;
use crate::data_fetcher::models::{RaceResult, ResultEntry};
use crate::error::AppError;

const DRIVER_WIDTH: usize = 22;
const TEAM_WIDTH: usize = 16;
const TIME_WIDTH: usize = 14;

/// Renders the classification of the last race of the served season.
pub fn render_results<W: Write>(
    out: &mut W,
    state: &ViewState<RaceResult>,
    options: &RenderOptions,
) -> Result<(), AppError> {
    render_view(out, "LAST RACE RESULTS", state, options, |painter, result| {
        render_race_header(painter, result)?;
        render_podium(painter, result)?;
        render_classification(painter, &result.results, options.show_all)?;
        render_fastest_lap(painter, result)
    })
}

fn render_race_header<W: Write>(
    painter: &mut Painter<'_, W>,
    result: &RaceResult,
) -> Result<(), AppError> {
    let race = &result.race;
    painter.heading(
        subheader_fg(),
        &format!("Round {}: {} {}", race.round, race.name, race.season),
    )?;
    painter.newline()?;
    painter.styled(
        text_fg(),
        &format!(
            "{}, {}, {}  {}",
            race.circuit.name,
            race.circuit.locality,
            race.circuit.country,
            race.date.format("%d.%m.%Y")
        ),
    )?;
    painter.newline()
}

fn render_podium<W: Write>(
    painter: &mut Painter<'_, W>,
    result: &RaceResult,
) -> Result<(), AppError> {
    let podium = result.podium();
    if podium.is_empty() {
        return Ok(());
    }

    painter.styled(subheader_fg(), "Podium:")?;
    for entry in podium {
        painter.text(" ")?;
        painter.styled(
            podium_fg(entry.position),
            &format!(
                "P{} {} ({})",
                entry.position, entry.driver.family_name, entry.constructor_name
            ),
        )?;
    }
    painter.newline()
}

fn render_classification<W: Write>(
    painter: &mut Painter<'_, W>,
    entries: &[ResultEntry],
    show_all: bool,
) -> Result<(), AppError> {
    let visible = if show_all {
        entries.len()
    } else {
        entries.len().min(RESULTS_COLLAPSED_ROWS)
    };

    painter.styled(
        subheader_fg(),
        &format!(
            "{} {} {} {} {} {}",
            fit_right("POS", 3),
            fit_left("DRIVER", DRIVER_WIDTH),
            fit_left("TEAM", TEAM_WIDTH),
            fit_right("GRID", 4),
            fit_left("TIME/STATUS", TIME_WIDTH),
            fit_right("PTS", 4)
        ),
    )?;
    painter.newline()?;

    for entry in &entries[..visible] {
        let outcome = entry.finish_time.as_deref().unwrap_or(&entry.status);
        let grid = match entry.grid {
            0 => "PIT".to_string(),
            grid => grid.to_string(),
        };

        painter.styled(
            podium_fg(entry.position),
            &fit_right(&entry.position.to_string(), 3),
        )?;
        painter.text(" ")?;
        painter.styled(text_fg(), &fit_left(&entry.driver.full_name(), DRIVER_WIDTH))?;
        painter.text(" ")?;
        painter.styled(text_fg(), &fit_left(&entry.constructor_name, TEAM_WIDTH))?;
        painter.text(" ")?;
        painter.styled(text_fg(), &fit_right(&grid, 4))?;
        painter.text(" ")?;
        painter.styled(text_fg(), &fit_left(outcome, TIME_WIDTH))?;
        painter.text(" ")?;
        painter.styled(points_fg(), &fit_right(&format_points(entry.points), 4))?;
        painter.newline()?;
    }

    render_hidden_rows_hint(painter, entries.len() - visible)
}

fn render_fastest_lap<W: Write>(
    painter: &mut Painter<'_, W>,
    result: &RaceResult,
) -> Result<(), AppError> {
    let Some(holder) = result.fastest_lap_holder() else {
        return Ok(());
    };
    let Some(lap) = &holder.fastest_lap else {
        return Ok(());
    };

    let mut line = format!("Fastest lap: {}", holder.driver.full_name());
    if let Some(time) = &lap.time {
        line.push_str(&format!(" {time}"));
    }
    line.push_str(&format!(" (lap {})", lap.lap));
    if let Some(speed) = &lap.average_speed {
        line.push_str(&format!(", {:.3} {}", speed.value, speed.units));
    }

    painter.styled(next_race_fg(), &line)?;
    painter.newline()
}
