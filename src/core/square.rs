use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::coord::Coord;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A board square packed as `row * 8 + col`.
///
/// Always in `0..64`; every constructor checks the range. Column and row are derived from the
/// index (`col = sq & 7`, `row = sq >> 3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const H8: Square = Square(63);

    #[inline]
    pub const fn new(index: u8) -> Option<Square> {
        if (index as usize) < SQUARE_COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    #[inline]
    pub fn from_coord(c: Coord) -> Option<Square> {
        if c.on_board() {
            Some(Square(((c.y as u8) << 3) | (c.x as u8)))
        } else {
            None
        }
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT as u8).map(Square)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 & 7
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub fn coord(self) -> Coord {
        Coord::new(self.col() as i32, self.row() as i32)
    }

    /// The square reached by jumping `delta` from here, if it stays on the board.
    #[inline]
    pub fn offset(self, delta: Coord) -> Option<Square> {
        Self::from_coord(self.coord() + delta)
    }

    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

/// Algebraic notation: file letter `a`-`h` then rank digit `1`-`8`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = (b'1' + self.row()) as char;
        write!(f, "{file}{rank}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSquareError {
    #[error("square index {0} is outside 0..64")]
    OutOfRange(u64),
    #[error("invalid square notation {0:?} (expected a1..h8 or 0..63)")]
    Invalid(String),
}

/// Accepts algebraic notation (`e4`, `E4`) or a raw index (`0`..`63`).
impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()) {
            let index: u64 = t
                .parse()
                .map_err(|_| ParseSquareError::Invalid(s.to_string()))?;
            return u8::try_from(index)
                .ok()
                .and_then(Square::new)
                .ok_or(ParseSquareError::OutOfRange(index));
        }

        match t.as_bytes() {
            [file, rank] => {
                let file = file.to_ascii_lowercase();
                if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
                    return Err(ParseSquareError::Invalid(s.to_string()));
                }
                Ok(Square(((rank - b'1') << 3) | (file - b'a')))
            }
            _ => Err(ParseSquareError::Invalid(s.to_string())),
        }
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
