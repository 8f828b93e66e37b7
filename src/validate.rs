//! Full-tour validation.

use serde::Serialize;

use crate::core::mask::VisitedMask;
use crate::core::path::Path;
use crate::core::square::{Square, SQUARE_COUNT};
use crate::topology::AdjacencyTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid moves count: {len} (expected 64)")]
    WrongLength { len: usize },
    #[error("duplicate square: {0}")]
    DuplicateSquare(Square),
    #[error("illegal move: {0} to {1}")]
    IllegalMove(Square, Square),
}

/// Check that `path` is a complete open tour under `table`.
///
/// Checks length, then duplicates (first repeat in path order), then each consecutive move, and
/// stops at the first failure.
pub fn validate(path: &Path, table: &AdjacencyTable) -> Result<(), ValidationError> {
    if path.len() != SQUARE_COUNT {
        return Err(ValidationError::WrongLength { len: path.len() });
    }

    let mut seen = VisitedMask::EMPTY;
    for sq in path.iter() {
        if seen.contains(sq) {
            return Err(ValidationError::DuplicateSquare(sq));
        }
        seen.insert(sq);
    }

    for (from, to) in path.moves() {
        if !table.is_move(from, to) {
            return Err(ValidationError::IllegalMove(from, to));
        }
    }

    Ok(())
}

pub fn is_valid(path: &Path, table: &AdjacencyTable) -> bool {
    validate(path, table).is_ok()
}
