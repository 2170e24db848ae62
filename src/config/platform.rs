use crate::domain::ThemeMode;
use std::env;

/// Read the terminal's colour-scheme hint once, at startup
pub fn detect_color_scheme() -> Option<ThemeMode> {
    let value = env::var("COLORFGBG").ok()?;
    parse_colorfgbg(&value)
}

/// Parse a `COLORFGBG` value such as `"15;0"` or `"0;default;15"`.
///
/// The last field is the background colour index. Indices 0-6 and 8 are the
/// dark entries of the standard 16-colour palette.
pub fn parse_colorfgbg(value: &str) -> Option<ThemeMode> {
    let bg = value.rsplit(';').next()?.trim();
    let index: u8 = bg.parse().ok()?;
    match index {
        0..=6 | 8 => Some(ThemeMode::Dark),
        _ => Some(ThemeMode::Light),
    }
}
