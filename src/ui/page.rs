use chrono::NaiveDate;
use std::io::Write;

use super::colors::*;
use super::painter::Painter;
use super::view_state::ViewState;
use crate::error::AppError;

/// Display switches shared by every view.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Show every row instead of the collapsed table.
    pub show_all: bool,
    /// No ANSI colors.
    pub plain: bool,
    /// Local date used for past/next race decisions.
    pub today: NaiveDate,
}

/// Draws the frame around a view body: title, loading/unavailable messages,
/// the older-season notice and the last-updated footer.
pub(crate) fn render_view<W, T, F>(
    out: &mut W,
    title: &str,
    state: &ViewState<T>,
    options: &RenderOptions,
    body: F,
) -> Result<(), AppError>
where
    W: Write,
    F: FnOnce(&mut Painter<'_, W>, &T) -> Result<(), AppError>,
{
    let mut painter = Painter::new(out, options.plain);

    painter.heading(header_fg(), title)?;
    if state.is_refreshing() {
        painter.styled(past_race_fg(), "  (refreshing)")?;
    }
    painter.newline()?;

    match state.displayed() {
        ViewState::Loading | ViewState::Refreshing { .. } => {
            painter.styled(text_fg(), "Loading...")?;
            painter.newline()?;
        }
        ViewState::Unavailable { message } => {
            painter.styled(error_fg(), message)?;
            painter.newline()?;
        }
        ViewState::Ready {
            data,
            last_updated,
            notice,
        } => {
            if let Some(notice) = notice {
                painter.styled(notice_fg(), notice)?;
                painter.newline()?;
            }
            body(&mut painter, data)?;
            painter.styled(
                past_race_fg(),
                &format!("Updated {}", last_updated.format("%H:%M:%S")),
            )?;
            painter.newline()?;
        }
    }

    painter.newline()?;
    painter.flush()
}

/// Prints the "n more" hint under a collapsed table.
pub(crate) fn render_hidden_rows_hint<W: Write>(
    painter: &mut Painter<'_, W>,
    hidden: usize,
) -> Result<(), AppError> {
    if hidden > 0 {
        painter.styled(past_race_fg(), &format!("  ... {hidden} more (use --all)"))?;
        painter.newline()?;
    }
    Ok(())
}
