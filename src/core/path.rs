use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::square::{Square, SQUARE_COUNT};

/// An ordered walk over the board, first square first.
///
/// During search this is used as a stack (push on descent, pop on backtrack) and never holds
/// duplicates. Paths built from arbitrary square lists carry no such guarantee; run them through
/// [`crate::validate::validate`] first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Square>);

impl Path {
    pub fn new() -> Self {
        Self(Vec::with_capacity(SQUARE_COUNT))
    }

    pub fn starting_at(start: Square) -> Self {
        let mut path = Self::new();
        path.push(start);
        path
    }

    #[inline]
    pub fn push(&mut self, sq: Square) {
        self.0.push(sq);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Square> {
        self.0.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True once every square of the board is on the path.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.0.len() == SQUARE_COUNT
    }

    pub fn first(&self) -> Option<Square> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Square> {
        self.0.last().copied()
    }

    pub fn squares(&self) -> &[Square] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.0.iter().copied()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn moves(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn into_squares(self) -> Vec<Square> {
        self.0
    }
}

impl From<Vec<Square>> for Path {
    fn from(squares: Vec<Square>) -> Self {
        Self(squares)
    }
}

impl FromIterator<Square> for Path {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Comma-separated algebraic squares, e.g. `a1,c2,e1`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}
