use crate::core::coord::Coord;
use crate::core::square::Square;

/// The 8 knight jumps as (Δcol, Δrow).
///
/// The order matters: adjacency lists are generated in this order and ties in the degree sort
/// keep it.
pub const KNIGHT_STEPS: [Coord; 8] = [
    Coord { x: -2, y: 1 },
    Coord { x: -2, y: -1 },
    Coord { x: 2, y: 1 },
    Coord { x: 2, y: -1 },
    Coord { x: -1, y: 2 },
    Coord { x: -1, y: -2 },
    Coord { x: 1, y: 2 },
    Coord { x: 1, y: -2 },
];

/// On-board knight targets from `from`, in [`KNIGHT_STEPS`] order.
pub fn knight_targets(from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_STEPS
        .into_iter()
        .filter_map(move |d| from.offset(d))
}

/// Whether `a` and `b` are one knight jump apart.
#[inline]
pub fn is_knight_jump(a: Square, b: Square) -> bool {
    let dx = (a.col() as i32 - b.col() as i32).abs();
    let dy = (a.row() as i32 - b.row() as i32).abs();
    (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_set_is_closed_under_negation() {
        for d in KNIGHT_STEPS {
            assert!(KNIGHT_STEPS.contains(&-d));
        }
    }

    #[test]
    fn targets_agree_with_jump_predicate() {
        for from in Square::all() {
            for to in Square::all() {
                assert_eq!(
                    knight_targets(from).any(|t| t == to),
                    is_knight_jump(from, to),
                    "{from} -> {to}"
                );
            }
        }
    }
}
