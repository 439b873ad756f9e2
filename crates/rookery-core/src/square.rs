//! Board squares addressed by row and column.
//!
//! Row 0 is the eighth rank and row 7 the first, so walking squares in index
//! order reads the board the same way a fingerprint does: A8, B8, ..., H8,
//! A7, ..., H1.

use std::fmt;

/// A square on the 8x8 grid, stored as `row * 8 + col`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row (0 = rank 8) and column (0 = file A).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse a display name such as `"E4"` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Square> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file = bytes[0].to_ascii_uppercase();
        let rank = bytes[1];
        if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }

        Square::new(b'8' - rank, file - b'A')
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of this square, 0 being the eighth rank.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Column of this square, 0 being file A.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Chess rank number (1..=8).
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.row()
    }

    /// Uppercase file letter (`'A'..='H'`).
    #[inline]
    pub const fn file_char(self) -> char {
        (b'A' + self.col()) as char
    }

    /// Step by a signed row/column delta, returning `None` when it leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square(row as u8 * 8 + col as u8))
        }
    }

    /// Iterate over all 64 squares in index order (A8, B8, ..., H1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A7: Square = Square(8);
    pub const B7: Square = Square(9);
    pub const C7: Square = Square(10);
    pub const D7: Square = Square(11);
    pub const E7: Square = Square(12);
    pub const F7: Square = Square(13);
    pub const G7: Square = Square(14);
    pub const H7: Square = Square(15);
    pub const A6: Square = Square(16);
    pub const B6: Square = Square(17);
    pub const C6: Square = Square(18);
    pub const D6: Square = Square(19);
    pub const E6: Square = Square(20);
    pub const F6: Square = Square(21);
    pub const G6: Square = Square(22);
    pub const H6: Square = Square(23);
    pub const A5: Square = Square(24);
    pub const B5: Square = Square(25);
    pub const C5: Square = Square(26);
    pub const D5: Square = Square(27);
    pub const E5: Square = Square(28);
    pub const F5: Square = Square(29);
    pub const G5: Square = Square(30);
    pub const H5: Square = Square(31);
    pub const A4: Square = Square(32);
    pub const B4: Square = Square(33);
    pub const C4: Square = Square(34);
    pub const D4: Square = Square(35);
    pub const E4: Square = Square(36);
    pub const F4: Square = Square(37);
    pub const G4: Square = Square(38);
    pub const H4: Square = Square(39);
    pub const A3: Square = Square(40);
    pub const B3: Square = Square(41);
    pub const C3: Square = Square(42);
    pub const D3: Square = Square(43);
    pub const E3: Square = Square(44);
    pub const F3: Square = Square(45);
    pub const G3: Square = Square(46);
    pub const H3: Square = Square(47);
    pub const A2: Square = Square(48);
    pub const B2: Square = Square(49);
    pub const C2: Square = Square(50);
    pub const D2: Square = Square(51);
    pub const E2: Square = Square(52);
    pub const F2: Square = Square(53);
    pub const G2: Square = Square(54);
    pub const H2: Square = Square(55);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn corners() {
        assert_eq!(Square::A8.index(), 0);
        assert_eq!(Square::H8.index(), 7);
        assert_eq!(Square::A1.index(), 56);
        assert_eq!(Square::H1.index(), 63);
    }

    #[test]
    fn row_col_rank() {
        let sq = Square::E4;
        assert_eq!(sq.row(), 4);
        assert_eq!(sq.col(), 4);
        assert_eq!(sq.rank(), 4);
        assert_eq!(sq.file_char(), 'E');
    }

    #[test]
    fn name_roundtrip() {
        for sq in Square::all() {
            let name = sq.to_string();
            assert_eq!(Square::from_name(&name), Some(sq));
            assert_eq!(Square::from_name(&name.to_ascii_lowercase()), Some(sq));
        }
    }

    #[test]
    fn from_name_invalid() {
        assert_eq!(Square::from_name(""), None);
        assert_eq!(Square::from_name("I1"), None);
        assert_eq!(Square::from_name("A9"), None);
        assert_eq!(Square::from_name("A10"), None);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::E2.offset(-2, 0), Some(Square::E4));
        assert_eq!(Square::A1.offset(0, -1), None);
        assert_eq!(Square::H8.offset(-1, 0), None);
        assert_eq!(Square::G1.offset(-2, -1), Some(Square::F3));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Square::E4), "E4");
        assert_eq!(format!("{:?}", Square::C7), "Square(C7)");
    }
}
