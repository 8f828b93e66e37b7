use crate::core::square::Square;

/// One bit per square: bit `i` set means square `i` has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VisitedMask(u64);

impl VisitedMask {
    pub const EMPTY: VisitedMask = VisitedMask(0);
    pub const FULL: VisitedMask = VisitedMask(u64::MAX);

    #[inline]
    pub fn contains(self, sq: Square) -> bool {
        self.0 & sq.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= sq.bit();
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !sq.bit();
    }

    #[inline]
    pub fn is_full(self) -> bool {
        self == Self::FULL
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}
