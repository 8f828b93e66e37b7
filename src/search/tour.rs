//! Depth-first backtracking tour search.
//!
//! The walker keeps a `Path` and a `VisitedMask` in lockstep: a square is pushed and marked
//! before the completion check, and popped and cleared when its subtree fails. Neighbours are
//! tried in adjacency-table order, which is what keeps the search fast.
//!
//! Completed tours are handed to a callback returning [`ControlFlow`]; `Break` unwinds the whole
//! recursion without touching the remaining branches.

use std::ops::ControlFlow;

use log::debug;

use crate::core::mask::VisitedMask;
use crate::core::path::Path;
use crate::core::square::Square;
use crate::search::resources::ResourceTracker;
use crate::search::{SearchError, SearchLimits, TourEnumeration, TourOutcome};
use crate::topology::AdjacencyTable;

struct TourWalker<'t> {
    table: &'t AdjacencyTable,
    path: Path,
    visited: VisitedMask,
    tracker: ResourceTracker,
}

impl<'t> TourWalker<'t> {
    fn new(start: Square, table: &'t AdjacencyTable, limits: SearchLimits) -> Self {
        let mut visited = VisitedMask::EMPTY;
        visited.insert(start);
        let mut tracker = ResourceTracker::new(limits);
        tracker.note_depth(1);
        Self {
            table,
            path: Path::starting_at(start),
            visited,
            tracker,
        }
    }

    fn walk<F>(&mut self, from: Square, on_tour: &mut F) -> Result<ControlFlow<()>, SearchError>
    where
        F: FnMut(&Path) -> ControlFlow<()>,
    {
        let table = self.table;
        for &next in table.neighbors(from) {
            if self.visited.contains(next) {
                continue;
            }

            self.path.push(next);
            self.visited.insert(next);
            self.tracker.note_depth(self.path.len());

            if self.completion_check()? {
                if on_tour(&self.path).is_break() {
                    return Ok(ControlFlow::Break(()));
                }
            } else if self.walk(next, on_tour)?.is_break() {
                return Ok(ControlFlow::Break(()));
            }

            self.path.pop();
            self.visited.remove(next);
            self.tracker.note_backtrack();
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Runs after the newest square is marked, before descending further.
    #[inline]
    fn completion_check(&mut self) -> Result<bool, SearchError> {
        self.tracker.bump_steps("tour_walk")?;
        debug_assert_eq!(self.visited.len(), self.path.len());
        Ok(self.visited.is_full())
    }
}

/// First tour from `start`, with statistics and an optional step budget.
pub fn search_tour(
    start: Square,
    table: &AdjacencyTable,
    limits: SearchLimits,
) -> Result<TourOutcome, SearchError> {
    debug!("searching tour from {start}");

    let mut walker = TourWalker::new(start, table, limits);
    let mut found: Option<Path> = None;
    let flow = walker.walk(start, &mut |path: &Path| {
        found = Some(path.clone());
        ControlFlow::Break(())
    })?;

    let stats = walker.tracker.stats();
    debug!(
        "tour from {start}: found={} completion_checks={} backtracks={}",
        flow.is_break(),
        stats.completion_checks,
        stats.backtracks
    );

    Ok(TourOutcome {
        start,
        path: found,
        stats,
    })
}

/// First tour from `start`, or `None` if the search tree holds no tour.
///
/// Runs without a budget, so the search always finishes (possibly after a long time).
pub fn find_tour(start: Square, table: &AdjacencyTable) -> Option<Path> {
    let outcome = search_tour(start, table, SearchLimits::UNBOUNDED);
    // Only a step budget can fail a search.
    debug_assert!(outcome.is_ok(), "unbounded search failed: {outcome:?}");
    outcome.ok().and_then(|outcome| outcome.path)
}

/// Collect up to `max_tours` tours from `start`, in search order.
///
/// After each tour the walk backtracks from the final square and keeps going. Running out of
/// budget ends the walk early but keeps the tours collected so far, with the error in
/// [`TourEnumeration::error`].
pub fn enumerate_tours(
    start: Square,
    table: &AdjacencyTable,
    limits: SearchLimits,
    max_tours: usize,
) -> TourEnumeration {
    debug!("enumerating up to {max_tours} tours from {start}");

    if max_tours == 0 {
        return TourEnumeration {
            start,
            tours: Vec::new(),
            stats: Default::default(),
            exhausted: false,
            error: None,
        };
    }

    let mut walker = TourWalker::new(start, table, limits);
    let mut tours: Vec<Path> = Vec::new();
    let result = walker.walk(start, &mut |path: &Path| {
        tours.push(path.clone());
        if tours.len() >= max_tours {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    let (exhausted, error) = match result {
        Ok(flow) => (flow.is_continue(), None),
        Err(err) => {
            debug!("enumeration from {start} stopped after {} tours: {err}", tours.len());
            (false, Some(err))
        }
    };

    TourEnumeration {
        start,
        tours,
        stats: walker.tracker.stats(),
        exhausted,
        error,
    }
}
