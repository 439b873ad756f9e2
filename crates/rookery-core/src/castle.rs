//! Castling geometry for both wings.

use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// Which wing the king castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the H-file rook.
    Short,
    /// Toward the A-file rook.
    Long,
}

impl CastleSide {
    /// Both wings, short first.
    pub const ALL: [CastleSide; 2] = [CastleSide::Short, CastleSide::Long];

    /// Column the king starts on.
    pub const KING_COL: u8 = 4;

    const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Short => 7,
            CastleSide::Long => 0,
        }
    }

    const fn king_dest_col(self) -> u8 {
        match self {
            CastleSide::Short => 6,
            CastleSide::Long => 2,
        }
    }

    const fn rook_dest_col(self) -> u8 {
        match self {
            CastleSide::Short => 5,
            CastleSide::Long => 3,
        }
    }

    fn on_back_row(color: Color, col: u8) -> Square {
        Square::new(color.back_row(), col).expect("castling columns lie on the board")
    }

    /// Home square of the king.
    pub fn king_from(color: Color) -> Square {
        Self::on_back_row(color, Self::KING_COL)
    }

    /// Where the king lands.
    pub fn king_to(self, color: Color) -> Square {
        Self::on_back_row(color, self.king_dest_col())
    }

    /// Corner the rook starts on.
    pub fn rook_from(self, color: Color) -> Square {
        Self::on_back_row(color, self.rook_col())
    }

    /// Square the rook lands on, which is also the square the king crosses.
    pub fn rook_to(self, color: Color) -> Square {
        Self::on_back_row(color, self.rook_dest_col())
    }

    /// Squares strictly between king and rook; all must be empty.
    pub fn between(self, color: Color) -> Vec<Square> {
        let (lo, hi) = match self {
            CastleSide::Short => (Self::KING_COL + 1, self.rook_col()),
            CastleSide::Long => (self.rook_col() + 1, Self::KING_COL),
        };
        (lo..hi).map(|col| Self::on_back_row(color, col)).collect()
    }

    /// Squares the king stands on, crosses, and lands on; none may be attacked.
    pub fn king_path(self, color: Color) -> [Square; 3] {
        [
            Self::king_from(color),
            self.rook_to(color),
            self.king_to(color),
        ]
    }

    /// Identify a castle from the king's source and destination.
    pub fn from_king_move(color: Color, from: Square, to: Square) -> Option<CastleSide> {
        if from != Self::king_from(color) {
            return None;
        }
        CastleSide::ALL
            .into_iter()
            .find(|side| side.king_to(color) == to)
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::Short => write!(f, "SHORT"),
            CastleSide::Long => write!(f, "LONG"),
        }
    }
}
