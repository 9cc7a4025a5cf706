//! Time utilities: parsing MM:SS / HH:MM:SS strings, formatting seconds.

use crate::errors::{AppError, AppResult};
use crate::models::display_mode::DisplayMode;

/// Parse a clock string into total seconds.
/// Two colon-separated fields are minutes:seconds, three are
/// hours:minutes:seconds. Field values are not range-checked, so "75:00"
/// is a valid 75 minutes.
pub fn parse_clock(t: &str) -> Option<i64> {
    let fields: Option<Vec<i64>> = t
        .trim()
        .split(':')
        .map(|p| p.parse::<u32>().ok().map(i64::from))
        .collect();

    match fields.as_deref() {
        Some([m, s]) => Some(m * 60 + s),
        Some([h, m, s]) => Some(h * 3600 + m * 60 + s),
        _ => None,
    }
}

/// Like `parse_clock` but surfaces the failure as an application error.
pub fn clock_to_seconds(t: &str) -> AppResult<i64> {
    parse_clock(t).ok_or_else(|| AppError::InvalidTime(t.trim().to_string()))
}

/// Format a number of seconds for display.
/// `Clock` renders HH:MM:SS, `Compact` renders MM:SS; every field is
/// zero-padded to two digits and the leading field grows past two digits
/// when the value demands it.
pub fn seconds_to_display(secs: i64, mode: DisplayMode) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();

    match mode {
        DisplayMode::Clock => format!(
            "{}{:02}:{:02}:{:02}",
            sign,
            s / 3600,
            (s % 3600) / 60,
            s % 60
        ),
        DisplayMode::Compact => format!("{}{:02}:{:02}", sign, s / 60, s % 60),
    }
}
