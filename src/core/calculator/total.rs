use crate::models::track::Track;

/// Sum of the per-track durations, in insertion order. Empty set is 0.
pub fn set_total(tracks: &[Track]) -> i64 {
    tracks.iter().map(|t| t.duration_seconds).sum()
}
