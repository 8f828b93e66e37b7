//! Knight move geometry on the 8×8 board.

pub mod piece;
