//! Knight's tour search.
//!
//! - [`tour`]: depth-first backtracking over the adjacency table (first tour, or several).
//! - [`resources`]: step budgets and search statistics.

pub mod resources;
pub mod tour;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::path::Path;
use crate::core::square::Square;

pub use tour::{enumerate_tours, find_tour, search_tour};

/// Search budgets. The default is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchLimits {
    /// Maximum number of completion checks (forward moves) before giving up.
    pub max_steps: Option<u64>,
}

impl SearchLimits {
    pub const UNBOUNDED: SearchLimits = SearchLimits { max_steps: None };

    pub fn with_max_steps(max_steps: u64) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }
}

/// Counters gathered during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of times the full-board check ran; one per square pushed after the start.
    pub completion_checks: u64,
    /// Number of squares popped while backtracking.
    pub backtracks: u64,
    /// Longest path reached.
    pub max_depth: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stats(completion_checks={}, backtracks={}, max_depth={})",
            self.completion_checks, self.backtracks, self.max_depth
        )
    }
}

/// Result of a first-tour search from one start square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourOutcome {
    pub start: Square,
    /// `None` when every branch was tried without completing a tour.
    pub path: Option<Path>,
    pub stats: SearchStats,
}

impl TourOutcome {
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

/// Result of collecting several tours from one start square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourEnumeration {
    pub start: Square,
    /// Tours in the order the search found them.
    pub tours: Vec<Path>,
    pub stats: SearchStats,
    /// True if the whole search tree was explored (as opposed to stopping at `max_tours`).
    pub exhausted: bool,
    /// Set when the step budget ran out; `tours` still holds everything found before that.
    pub error: Option<SearchError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum SearchError {
    #[error("limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); {stats}")]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        stats: SearchStats,
    },
}
