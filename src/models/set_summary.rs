use serde::Serialize;

/// Aggregated view of the current set, built by `Core::build_set_summary`.
#[derive(Debug, Default, Serialize)]
pub struct SetSummary {
    pub tracks: usize,
    pub total_seconds: i64,
    pub longest_seconds: i64,
    pub average_seconds: i64,
}
