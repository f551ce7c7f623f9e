use crossterm::style::Color;

// Remote appearance
pub fn title_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn button_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn border_fg() -> Color {
    Color::AnsiValue(245)
} // Mid grey
pub fn power_on_bg() -> Color {
    Color::AnsiValue(28)
} // Green
pub fn muted_bg() -> Color {
    Color::AnsiValue(130)
} // Amber
pub fn status_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn status_off_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn footer_fg() -> Color {
    Color::AnsiValue(244)
} // Grey
