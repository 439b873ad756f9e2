//! A set of squares packed into a 64-bit mask, one bit per square index.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::square::Square;

/// A set of board squares.
///
/// Bit `n` corresponds to [`Square`] index `n` (A8 is bit 0, H1 is bit 63).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// No squares.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// All 64 squares.
    pub const FULL: SquareSet = SquareSet(!0);

    /// Create a set holding a single square.
    #[inline]
    pub const fn from_square(sq: Square) -> SquareSet {
        SquareSet(1u64 << sq.index())
    }

    /// Return `true` if no squares are in the set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if the square is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Return a new set with the given square added.
    #[inline]
    pub const fn with(self, sq: Square) -> SquareSet {
        SquareSet(self.0 | (1u64 << sq.index()))
    }

    /// Return a new set with the given square removed.
    #[inline]
    pub const fn without(self, sq: Square) -> SquareSet {
        SquareSet(self.0 & !(1u64 << sq.index()))
    }

    /// Add a square in place.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    /// Iterate over the squares in index order.
    pub fn iter(self) -> impl Iterator<Item = Square> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Square::from_index(index)
        })
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl Not for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn not(self) -> SquareSet {
        SquareSet(!self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SquareSet;
    use crate::square::Square;

    #[test]
    fn empty_and_full() {
        assert!(SquareSet::EMPTY.is_empty());
        assert_eq!(SquareSet::FULL.count(), 64);
        assert_eq!(!SquareSet::EMPTY, SquareSet::FULL);
    }

    #[test]
    fn with_and_without() {
        let set = SquareSet::EMPTY.with(Square::E4).with(Square::A8);
        assert!(set.contains(Square::E4));
        assert!(set.contains(Square::A8));
        assert!(!set.contains(Square::E5));
        assert_eq!(set.count(), 2);
        assert!(!set.without(Square::E4).contains(Square::E4));
    }

    #[test]
    fn iter_in_index_order() {
        let set: SquareSet = [Square::H1, Square::A8, Square::D5].into_iter().collect();
        let squares: Vec<Square> = set.iter().collect();
        assert_eq!(squares, vec![Square::A8, Square::D5, Square::H1]);
    }

    #[test]
    fn set_operators() {
        let a = SquareSet::from_square(Square::C3) | SquareSet::from_square(Square::D4);
        let b = SquareSet::from_square(Square::D4);
        assert_eq!(a & b, b);
        let mut c = SquareSet::EMPTY;
        c |= a;
        assert_eq!(c, a);
    }
}
