use crate::core::calculator::total;
use crate::models::{set_summary::SetSummary, track::Track};

pub struct Core;

impl Core {
    pub fn build_set_summary(tracks: &[Track]) -> SetSummary {
        if tracks.is_empty() {
            return SetSummary::default();
        }

        let total_seconds = total::set_total(tracks);
        let longest = tracks
            .iter()
            .map(|t| t.duration_seconds)
            .max()
            .unwrap_or(0);

        SetSummary {
            tracks: tracks.len(),
            total_seconds,
            longest_seconds: longest,
            average_seconds: total_seconds / tracks.len() as i64,
        }
    }
}
