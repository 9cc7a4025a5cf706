/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Durations render cyan, totals green, empty placeholders grey.
pub fn colorize_duration(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{CYAN}{value}{RESET}")
    }
}

pub fn colorize_total(value: &str) -> String {
    format!("{GREEN}{value}{RESET}")
}
