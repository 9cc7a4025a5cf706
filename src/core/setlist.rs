use crate::core::calculator::{duration, total};
use crate::errors::AppResult;
use crate::models::track::Track;
use crate::utils::time::clock_to_seconds;

/// In-memory, session-scoped track log.
///
/// Owned exclusively by the session loop that created it: grows by one entry
/// per valid add, is cleared only by an explicit reset, and is discarded
/// with the session. Track numbering is the 1-based position in insertion
/// order.
#[derive(Debug, Default)]
pub struct SetLog {
    tracks: Vec<Track>,
}

impl SetLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse both times, compute the duration and append a new track.
    /// Returns the duration of the track just added, for immediate feedback.
    /// On a parse error nothing is appended and the set is untouched.
    pub fn add_track(&mut self, start: &str, end: &str) -> AppResult<i64> {
        let start_secs = clock_to_seconds(start)?;
        let end_secs = clock_to_seconds(end)?;

        let secs = duration::track_duration(start_secs, end_secs);
        self.tracks.push(Track::new(start.trim(), end.trim(), secs));

        Ok(secs)
    }

    pub fn total_seconds(&self) -> i64 {
        total::set_total(&self.tracks)
    }

    /// Discard every entry. Irreversible.
    pub fn reset(&mut self) {
        self.tracks.clear();
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
