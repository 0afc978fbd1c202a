//! Utility functions for standings computation

/// Signed difference between two counters, saturating at the `i64` range
pub fn differential(wins: u64, losses: u64) -> i64 {
    let diff = i128::from(wins) - i128::from(losses);
    i64::try_from(diff).unwrap_or(if diff > 0 { i64::MAX } else { i64::MIN })
}

/// Convert a counter to a criterion score, saturating at `i64::MAX`
pub fn as_score(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
