//! Scoring module - line-clear points, levels and tick intervals
//!
//! Points are awarded once per tick for the rows cleared in that tick, so a
//! four-row clear is worth 800 rather than four single clears. The level is a
//! pure function of the cumulative score and the tick interval a pure
//! function of the level.

use std::time::Duration;

use crate::types::{LEVEL_THRESHOLDS, LINE_SCORES, MAX_LEVEL, MIN_LEVEL, TICK_INTERVALS_NS};

/// Points for clearing `lines` rows in one tick.
///
/// Counts outside 1..=4 score nothing; more than four rows can only be
/// cleared at once on a hand-built board.
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Level (1-5) reached at a cumulative score.
pub fn level_for_score(score: u32) -> u32 {
    let passed = LEVEL_THRESHOLDS
        .iter()
        .take_while(|&&threshold| score >= threshold)
        .count() as u32;
    MIN_LEVEL + passed
}

/// Tick interval in nanoseconds for a level; clamped to the 1-5 range.
pub fn tick_interval_ns(level: u32) -> u64 {
    let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
    TICK_INTERVALS_NS[(level - MIN_LEVEL) as usize]
}

/// Tick interval for a level as a [`Duration`].
pub fn tick_interval(level: u32) -> Duration {
    Duration::from_nanos(tick_interval_ns(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 100);
        assert_eq!(line_clear_points(2), 300);
        assert_eq!(line_clear_points(3), 500);
        assert_eq!(line_clear_points(4), 800);
        assert_eq!(line_clear_points(5), 0);
    }

    #[test]
    fn test_tetris_is_not_four_singles() {
        assert_ne!(line_clear_points(4), 4 * line_clear_points(1));
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(1499), 1);
        assert_eq!(level_for_score(1500), 2);
        assert_eq!(level_for_score(2999), 2);
        assert_eq!(level_for_score(3000), 3);
        assert_eq!(level_for_score(4500), 4);
        assert_eq!(level_for_score(5999), 4);
        assert_eq!(level_for_score(6000), 5);
        assert_eq!(level_for_score(u32::MAX), 5);
    }

    #[test]
    fn test_level_is_monotonic_in_score() {
        let mut last = 0;
        for score in (0..8000).step_by(100) {
            let level = level_for_score(score);
            assert!(level >= last);
            last = level;
        }
    }

    #[test]
    fn test_tick_intervals() {
        assert_eq!(tick_interval_ns(1), 500_000_000);
        assert_eq!(tick_interval_ns(2), 400_000_000);
        assert_eq!(tick_interval_ns(3), 300_000_000);
        assert_eq!(tick_interval_ns(4), 200_000_000);
        assert_eq!(tick_interval_ns(5), 100_000_000);
        // Clamped
        assert_eq!(tick_interval_ns(0), 500_000_000);
        assert_eq!(tick_interval_ns(9), 100_000_000);
        assert_eq!(tick_interval(5), Duration::from_millis(100));
    }
}
