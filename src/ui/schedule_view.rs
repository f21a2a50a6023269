use chrono::{Datelike, NaiveDate};
use std::io::Write;

use super::colors::*;
use super::page::{RenderOptions, render_view};
use super::painter::{Painter, fit_left, fit_right};
use super::view_state::ViewState;
use crate::data_fetcher::models::{RaceEvent, next_race};
use crate::error::AppError;

const RACE_WIDTH: usize = 28;

/// Renders the season calendar grouped by month.
pub fn render_schedule<W: Write>(
    out: &mut W,
    state: &ViewState<Vec<RaceEvent>>,
    options: &RenderOptions,
) -> Result<(), AppError> {
    render_view(out, "RACE CALENDAR", state, options, |painter, races| {
        render_next_race(painter, races, options.today)?;
        render_months(painter, races, options.today)
    })
}

fn render_next_race<W: Write>(
    painter: &mut Painter<'_, W>,
    races: &[RaceEvent],
    today: NaiveDate,
) -> Result<(), AppError> {
    match next_race(races, today) {
        Some(race) => {
            let line = format!(
                "Next race: {} in {}",
                race.name,
                countdown(race.days_until(today))
            );
            painter.styled(next_race_fg(), &line)?;
        }
        None => painter.styled(past_race_fg(), "No upcoming races this season")?,
    }
    painter.newline()
}

fn countdown(days: i64) -> String {
    match days {
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    }
}

fn render_months<W: Write>(
    painter: &mut Painter<'_, W>,
    races: &[RaceEvent],
    today: NaiveDate,
) -> Result<(), AppError> {
    let next_round = next_race(races, today).map(|race| race.round);
    let mut current_month = None;

    for race in races {
        let month = (race.date.year(), race.date.month());
        if current_month != Some(month) {
            current_month = Some(month);
            painter.heading(
                subheader_fg(),
                &race.date.format("%B %Y").to_string().to_uppercase(),
            )?;
            painter.newline()?;
        }

        let (marker, color) = if race.is_past(today) {
            (if painter.is_plain() { "x" } else { "✓" }, past_race_fg())
        } else if Some(race.round) == next_round {
            (">", next_race_fg())
        } else {
            (" ", text_fg())
        };

        let start = match race.time {
            Some(_) => race.starts_at().format("%H:%M UTC").to_string(),
            None => String::new(),
        };

        painter.styled(
            color,
            &format!(
                "{marker} R{} {}  {} {}, {}  {}",
                fit_right(&race.round.to_string(), 2),
                race.date.format("%d.%m."),
                fit_left(&race.name, RACE_WIDTH),
                race.circuit.locality,
                race.circuit.country,
                start
            )
            .trim_end()
            .to_string(),
        )?;
        painter.newline()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::Circuit;
    use chrono::{Local, NaiveTime, Utc};

    fn race(round: u32, name: &str, date: (i32, u32, u32)) -> RaceEvent {
        RaceEvent {
            season: date.0,
            round,
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: Some(NaiveTime::from_hms_opt(13, 0, 0).unwrap()),
            circuit: Circuit {
                id: format!("circuit_{round}"),
                name: format!("Circuit {round}"),
                locality: "Town".to_string(),
                country: "Country".to_string(),
            },
            fetched_at: Utc::now(),
        }
    }

    fn render(races: Vec<RaceEvent>, today: NaiveDate) -> String {
        let state = ViewState::Ready {
            data: races,
            last_updated: Local::now(),
            notice: None,
        };
        let options = RenderOptions {
            show_all: false,
            plain: true,
            today,
        };
        let mut buffer = Vec::new();
        render_schedule(&mut buffer, &state, &options).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn season() -> Vec<RaceEvent> {
        vec![
            race(1, "Bahrain Grand Prix", (2024, 3, 2)),
            race(2, "Saudi Arabian Grand Prix", (2024, 3, 9)),
            race(3, "Australian Grand Prix", (2024, 3, 24)),
            race(4, "Japanese Grand Prix", (2024, 4, 7)),
        ]
    }

    #[test]
    fn test_schedule_groups_by_month() {
        let output = render(season(), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());

        assert!(output.contains("MARCH 2024"));
        assert!(output.contains("APRIL 2024"));
        assert_eq!(output.matches("MARCH 2024").count(), 1);
        assert!(output.contains("13:00 UTC"));
    }

    #[test]
    fn test_past_races_marked_and_next_race_countdown() {
        let output = render(season(), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());

        assert!(output.contains("Next race: Australian Grand Prix in 4 days"));
        assert!(output.contains("x R 1"));
        assert!(output.contains("x R 2"));
        assert!(output.contains("> R 3"));
        assert!(output.contains("  R 4"));
    }

    #[test]
    fn test_finished_season_has_no_next_race() {
        let output = render(season(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert!(output.contains("No upcoming races this season"));
    }

    #[test]
    fn test_countdown_wording() {
        assert_eq!(countdown(1), "1 day");
        assert_eq!(countdown(12), "12 days");
    }
}
