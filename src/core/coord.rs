use std::ops::{Add, Neg};

use crate::core::square::BOARD_SIZE;

/// A signed (column, row) pair. Used both for absolute board coordinates and for jump deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies on the 8×8 board.
    #[inline]
    pub fn on_board(self) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.x, -self.y)
    }
}
