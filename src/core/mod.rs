//! Low-level, allocation-light board primitives.
//!
//! - [`coord`]: signed (column, row) pairs used for coordinates and jump deltas.
//! - [`square`]: one of the 64 board squares, packed as `row * 8 + col`.
//! - [`mask`]: a 64-bit visited set.
//! - [`path`]: an ordered walk over squares, used as the search stack.

pub mod coord;
pub mod mask;
pub mod path;
pub mod square;
