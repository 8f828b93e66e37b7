//! Budget tracking for tour searches.
//!
//! The search tree is finite but can be very large for unlucky start squares. Callers may cap it
//! with [`SearchLimits::max_steps`]; the tracker turns an exhausted budget into a
//! [`SearchError::LimitExceeded`].

use crate::search::{SearchError, SearchLimits, SearchStats};

#[derive(Debug, Clone)]
/// Tracks budgets and counters during a search.
pub struct ResourceTracker {
    limits: SearchLimits,
    stats: SearchStats,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Count one completion check against the step budget.
    #[inline]
    pub fn bump_steps(&mut self, stage: &'static str) -> Result<(), SearchError> {
        self.stats.completion_checks = self.stats.completion_checks.saturating_add(1);
        let observed = self.stats.completion_checks;

        match self.limits.max_steps {
            Some(limit) if observed > limit => Err(SearchError::LimitExceeded {
                stage,
                metric: "completion_checks",
                limit,
                observed,
                stats: self.stats,
            }),
            _ => Ok(()),
        }
    }

    #[inline]
    pub fn note_backtrack(&mut self) {
        self.stats.backtracks = self.stats.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn note_depth(&mut self, depth: usize) {
        self.stats.max_depth = self.stats.max_depth.max(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_allows_exactly_max_steps() {
        let mut tracker = ResourceTracker::new(SearchLimits::with_max_steps(2));
        assert!(tracker.bump_steps("test").is_ok());
        assert!(tracker.bump_steps("test").is_ok());
        let err = tracker.bump_steps("test").unwrap_err();
        assert!(matches!(
            err,
            SearchError::LimitExceeded {
                limit: 2,
                observed: 3,
                ..
            }
        ));
    }

    #[test]
    fn unbounded_never_fails() {
        let mut tracker = ResourceTracker::new(SearchLimits::UNBOUNDED);
        for _ in 0..10_000 {
            tracker.bump_steps("test").unwrap();
        }
        assert_eq!(tracker.stats().completion_checks, 10_000);
    }
}
