//! Styled line output shared by every view.
//!
//! Views write through a `Painter` so that plain mode is a single switch:
//! with `plain` set no escape sequence reaches the writer.

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::AppError;

pub struct Painter<'a, W: Write> {
    out: &'a mut W,
    plain: bool,
}

impl<'a, W: Write> Painter<'a, W> {
    pub fn new(out: &'a mut W, plain: bool) -> Self {
        Self { out, plain }
    }

    pub fn is_plain(&self) -> bool {
        self.plain
    }

    /// Writes `text` in `color`, or verbatim in plain mode.
    pub fn styled(&mut self, color: Color, text: &str) -> Result<(), AppError> {
        if self.plain {
            write!(self.out, "{text}")?;
        } else {
            queue!(self.out, SetForegroundColor(color), Print(text), ResetColor)?;
        }
        Ok(())
    }

    /// Bold variant of `styled`, used for section headings.
    pub fn heading(&mut self, color: Color, text: &str) -> Result<(), AppError> {
        if self.plain {
            write!(self.out, "{text}")?;
        } else {
            queue!(
                self.out,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(color),
                Print(text),
                ResetColor,
                SetAttribute(Attribute::Reset)
            )?;
        }
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> Result<(), AppError> {
        write!(self.out, "{text}")?;
        Ok(())
    }

    pub fn newline(&mut self) -> Result<(), AppError> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), AppError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Left-aligns `text` in exactly `width` terminal columns, truncating with `…`
/// when it does not fit.
pub fn fit_left(text: &str, width: usize) -> String {
    let fitted = truncate_to_width(text, width);
    let padding = width.saturating_sub(fitted.width());
    format!("{fitted}{}", " ".repeat(padding))
}

/// Right-aligned counterpart of `fit_left`, for numeric columns.
pub fn fit_right(text: &str, width: usize) -> String {
    let fitted = truncate_to_width(text, width);
    let padding = width.saturating_sub(fitted.width());
    format!("{}{fitted}", " ".repeat(padding))
}

fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width - 1 {
            break;
        }
        result.push(ch);
        used += ch_width;
    }
    result.push('…');
    result
}

/// Championship points without a trailing `.0` for whole numbers.
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{points:.0}")
    } else {
        format!("{points}")
    }
}
