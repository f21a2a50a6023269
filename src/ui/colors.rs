use crossterm::style::Color;

// Dashboard palette, 256-colour ANSI values
pub fn header_fg() -> Color {
    Color::AnsiValue(196)
} // Racing red
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn position_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn points_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn past_race_fg() -> Color {
    Color::AnsiValue(244)
} // Mid grey
pub fn next_race_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta
pub fn notice_fg() -> Color {
    Color::AnsiValue(214)
} // Amber
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Racing red

/// Podium colours for P1, P2 and P3; everyone else uses `text_fg`.
pub fn podium_fg(position: u32) -> Color {
    match position {
        1 => Color::AnsiValue(220), // Gold
        2 => Color::AnsiValue(252), // Silver
        3 => Color::AnsiValue(172), // Bronze
        _ => text_fg(),
    }
}
