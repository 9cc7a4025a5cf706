/// Seconds in one day, used for the midnight wraparound.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Duration between two clock positions, in seconds.
///
/// An end numerically earlier than its start is taken as a single midnight
/// crossing and gets one day added before subtracting. The result is never
/// negative. There is no plausibility check on the resulting length: a set
/// longer than 24 hours folds back into the wraparound.
pub fn track_duration(start_secs: i64, end_secs: i64) -> i64 {
    if end_secs < start_secs {
        end_secs + SECONDS_PER_DAY - start_secs
    } else {
        end_secs - start_secs
    }
}
