//! Knight-move adjacency for the 8×8 board.
//!
//! The table is built in two passes: first every square's raw target list, then every list is
//! re-ordered by the targets' own degrees (fewest onward moves first). The second pass needs all
//! of the first pass, since a list's sort keys belong to other squares.

use std::ops::Index;
use std::sync::OnceLock;

use log::debug;

use crate::chess::piece::knight_targets;
use crate::core::square::{Square, SQUARE_COUNT};

/// Per-square knight targets in Warnsdorff order. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTable {
    entries: Vec<Vec<Square>>,
}

impl AdjacencyTable {
    /// A process-wide table, built on first use.
    pub fn shared() -> &'static AdjacencyTable {
        static TABLE: OnceLock<AdjacencyTable> = OnceLock::new();
        TABLE.get_or_init(build_adjacency)
    }

    #[inline]
    pub fn neighbors(&self, sq: Square) -> &[Square] {
        &self.entries[sq.index()]
    }

    #[inline]
    pub fn degree(&self, sq: Square) -> usize {
        self.entries[sq.index()].len()
    }

    /// Whether `to` is listed as a knight move from `from`.
    #[inline]
    pub fn is_move(&self, from: Square, to: Square) -> bool {
        self.neighbors(from).contains(&to)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Square])> + '_ {
        Square::all().zip(self.entries.iter().map(Vec::as_slice))
    }

    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }
}

impl Index<Square> for AdjacencyTable {
    type Output = [Square];

    fn index(&self, sq: Square) -> &[Square] {
        self.neighbors(sq)
    }
}

pub fn build_adjacency() -> AdjacencyTable {
    let raw: Vec<Vec<Square>> = Square::all().map(|sq| knight_targets(sq).collect()).collect();
    debug_assert_eq!(raw.len(), SQUARE_COUNT);

    let degree: Vec<usize> = raw.iter().map(Vec::len).collect();

    // Stable sort: ties keep step-generation order.
    let entries: Vec<Vec<Square>> = raw
        .into_iter()
        .map(|mut targets| {
            targets.sort_by_key(|t| degree[t.index()]);
            targets
        })
        .collect();

    let table = AdjacencyTable { entries };
    debug!(
        "built knight adjacency: {} squares, {} directed moves",
        SQUARE_COUNT,
        table.edge_count()
    );
    table
}
