//! Formatting utilities used for CLI outputs.

use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Strip ANSI escape sequences, used before measuring printable widths.
pub fn strip_ansi(s: &str) -> String {
    let re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Printable width of a possibly-colored cell.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Right-pad to `width` printable columns, ignoring ANSI sequences.
pub fn pad_visible(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Human-readable length, e.g. "1h 24m 05s" or "24m 05s".
pub fn secs2readable(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();

    let hours = s / 3600;
    let minutes = (s % 3600) / 60;
    let seconds = s % 60;

    if hours > 0 {
        format!("{}{}h {:02}m {:02}s", sign, hours, minutes, seconds)
    } else {
        format!("{}{}m {:02}s", sign, minutes, seconds)
    }
}
