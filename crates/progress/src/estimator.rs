//! Completion time estimation.

use chrono::Duration;
use learnpath_core::Time;

use crate::stats::ProgressStats;

/// Hours in a week.
const WEEK_HOURS: u64 = 7 * 24;

/// Estimates when the remaining hours will be done at a steady weekly pace.
#[derive(Debug, Clone, Copy)]
pub struct CompletionEstimator {
    hours_per_week: u32,
}

impl CompletionEstimator {
    /// Create an estimator for the given weekly study pace.
    pub fn new(hours_per_week: u32) -> Self {
        Self { hours_per_week }
    }

    /// Weeks needed for the remaining hours, rounded up. `None` for a zero pace
    /// with work remaining.
    pub fn weeks_remaining(&self, stats: &ProgressStats) -> Option<u64> {
        if stats.remaining_hours == 0 {
            return Some(0);
        }
        let pace = u64::from(self.hours_per_week);
        if pace == 0 {
            return None;
        }
        Some(stats.remaining_hours.div_ceil(pace))
    }

    /// Estimated completion time.
    pub fn estimate(&self, stats: &ProgressStats, now: Time) -> Option<Time> {
        if stats.remaining_hours == 0 {
            return Some(now);
        }
        let pace = u64::from(self.hours_per_week);
        if pace == 0 {
            return None;
        }

        // Calendar hours needed at this pace, rounded up.
        let hours = (stats.remaining_hours * WEEK_HOURS).div_ceil(pace);
        Some(now + Duration::hours(i64::try_from(hours).ok()?))
    }
}

impl Default for CompletionEstimator {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stats(remaining: u64) -> ProgressStats {
        ProgressStats {
            remaining_hours: remaining,
            ..Default::default()
        }
    }

    #[test]
    fn test_nothing_remaining_is_now() {
        let now = Utc::now();
        assert_eq!(CompletionEstimator::new(0).estimate(&stats(0), now), Some(now));
        assert_eq!(CompletionEstimator::new(5).weeks_remaining(&stats(0)), Some(0));
    }

    #[test]
    fn test_zero_pace_is_unknown() {
        assert!(CompletionEstimator::new(0).estimate(&stats(4), Utc::now()).is_none());
        assert!(CompletionEstimator::new(0).weeks_remaining(&stats(4)).is_none());
    }

    #[test]
    fn test_estimate_scales_with_pace() {
        let now = Utc::now();
        let estimator = CompletionEstimator::new(10);

        assert_eq!(estimator.estimate(&stats(20), now), Some(now + Duration::weeks(2)));
        assert_eq!(estimator.weeks_remaining(&stats(25)), Some(3));
    }
}
