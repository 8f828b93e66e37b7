//! Driver: run searches over a range of start squares and describe the results.
//!
//! Each start square yields a [`StartReport`] with the elapsed wall-clock time, the search
//! counters, the tour(s) found and the validator's verdict. A search that finds nothing or runs
//! out of budget still produces a report; neither aborts the run.

use std::fmt;
use std::time::{Duration, Instant};

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::TourConfig;
use crate::core::path::Path;
use crate::core::square::Square;
use crate::search::{enumerate_tours, search_tour, SearchError, SearchStats};
use crate::topology::AdjacencyTable;
use crate::validate::{validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TourStatus {
    Found,
    NotFound,
    LimitExceeded,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartReport {
    pub start: Square,
    pub status: TourStatus,
    #[serde(skip)]
    pub elapsed: Duration,
    pub elapsed_ms: f64,
    pub stats: SearchStats,
    /// Tours in search order; at most one unless enumeration was requested.
    pub tours: Vec<Path>,
    /// Whether the search tree was fully explored.
    pub exhausted: bool,
    /// First validation failure among the reported tours. Without a tour, the bare start
    /// path is validated, which fails on length.
    pub validation_error: Option<ValidationError>,
    pub search_error: Option<SearchError>,
}

impl StartReport {
    pub fn path(&self) -> Option<&Path> {
        self.tours.first()
    }

    pub fn is_valid(&self) -> bool {
        self.validation_error.is_none()
    }
}

/// Search from one start square and validate whatever comes back.
pub fn run_start(start: Square, table: &AdjacencyTable, config: &TourConfig) -> StartReport {
    let timer = Instant::now();
    let (tours, stats, exhausted, search_error) = match config.enumerate {
        Some(max_tours) => {
            let e = enumerate_tours(start, table, config.limits, max_tours);
            (e.tours, e.stats, e.exhausted, e.error)
        }
        None => match search_tour(start, table, config.limits) {
            Ok(o) => {
                let exhausted = o.path.is_none();
                (o.path.into_iter().collect::<Vec<Path>>(), o.stats, exhausted, None)
            }
            Err(err) => {
                let SearchError::LimitExceeded { stats, .. } = err;
                (Vec::new(), stats, false, Some(err))
            }
        },
    };
    let elapsed = timer.elapsed();

    if let Some(err) = &search_error {
        warn!("search from {start} stopped after {} tours: {err}", tours.len());
    }

    let status = match (&search_error, tours.is_empty()) {
        (Some(_), _) => TourStatus::LimitExceeded,
        (None, false) => TourStatus::Found,
        (None, true) => TourStatus::NotFound,
    };

    let validation_error = if tours.is_empty() {
        validate(&Path::starting_at(start), table).err()
    } else {
        tours.iter().find_map(|t| validate(t, table).err())
    };
    if let (false, Some(e)) = (tours.is_empty(), validation_error) {
        warn!("tour from {start} failed validation: {e}");
    }

    info!(
        "{start}: {:?} in {:.3} ms, {} completion checks",
        status,
        elapsed.as_secs_f64() * 1000.0,
        stats.completion_checks
    );

    StartReport {
        start,
        status,
        elapsed,
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        stats,
        tours,
        exhausted,
        validation_error,
        search_error,
    }
}

/// Run every configured start square, in ascending order.
///
/// With `config.parallel` the squares are searched on the rayon pool; the output order is the
/// same either way.
pub fn run_all(config: &TourConfig, table: &AdjacencyTable) -> Vec<StartReport> {
    let squares: Vec<Square> = config.starts.squares().collect();
    if config.parallel {
        squares
            .par_iter()
            .map(|&sq| run_start(sq, table, config))
            .collect()
    } else {
        squares
            .iter()
            .map(|&sq| run_start(sq, table, config))
            .collect()
    }
}

/// Block layout per start square:
///
/// ```text
/// Finding path for square: a1
/// Time elapsed (ms): 1.234
/// Iterations: 10759
/// a1,c2,a3,...
/// Moves sequence is valid? true
/// ```
impl fmt::Display for StartReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Finding path for square: {}", self.start)?;
        writeln!(f, "Time elapsed (ms): {:.3}", self.elapsed_ms)?;
        writeln!(f, "Iterations: {}", self.stats.completion_checks)?;

        for tour in &self.tours {
            writeln!(f, "{tour}")?;
        }
        let n = self.tours.len();
        if n > 1 || (n == 1 && (self.exhausted || self.search_error.is_some())) {
            writeln!(f, "Tours found: {n} (search exhausted: {})", self.exhausted)?;
        }
        match &self.search_error {
            Some(err) => writeln!(f, "search stopped: {err}")?,
            None if n == 0 => writeln!(f, "no path found")?,
            None => {}
        }

        match &self.validation_error {
            None => write!(f, "Moves sequence is valid? true"),
            Some(e) => write!(f, "Moves sequence is valid? false ({e})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub searched: usize,
    pub found: usize,
    pub valid: usize,
    pub limit_exceeded: usize,
    pub total_elapsed_ms: f64,
}

pub fn summarize(reports: &[StartReport]) -> RunSummary {
    RunSummary {
        searched: reports.len(),
        found: reports
            .iter()
            .filter(|r| r.status == TourStatus::Found)
            .count(),
        valid: reports.iter().filter(|r| r.is_valid()).count(),
        limit_exceeded: reports
            .iter()
            .filter(|r| r.status == TourStatus::LimitExceeded)
            .count(),
        total_elapsed_ms: reports.iter().map(|r| r.elapsed_ms).sum(),
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Searched {} start squares: {} found, {} valid, {} over budget ({:.3} ms total)",
            self.searched, self.found, self.valid, self.limit_exceeded, self.total_elapsed_ms
        )
    }
}
