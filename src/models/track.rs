use chrono::Local;
use serde::Serialize;

use crate::models::display_mode::DisplayMode;
use crate::utils::time::seconds_to_display;

/// One logged track: the start/end strings as the user typed them plus the
/// computed duration. Immutable once created; the set only appends or clears.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    pub start: String,
    pub end: String,
    pub duration_seconds: i64,
    pub added_at: String, // ISO8601, stamped at creation
}

impl Track {
    pub fn new(start: &str, end: &str, duration_seconds: i64) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            duration_seconds,
            added_at: Local::now().to_rfc3339(),
        }
    }

    pub fn duration_str(&self, mode: DisplayMode) -> String {
        seconds_to_display(self.duration_seconds, mode)
    }
}
