//! Chess piece kinds and their static values.

use std::fmt;

/// The kind of a chess piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unsigned material value in centipawns.
    ///
    /// | Piece  | value |
    /// |--------|-------|
    /// | Pawn   |   100 |
    /// | Knight |   305 |
    /// | Bishop |   333 |
    /// | Rook   |   563 |
    /// | Queen  |   950 |
    /// | King   |  9990 |
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 305,
            PieceKind::Bishop => 333,
            PieceKind::Rook => 563,
            PieceKind::Queen => 950,
            PieceKind::King => 9990,
        }
    }

    /// Uppercase name used in receipts and move requests.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "PAWN",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Rook => "ROOK",
            PieceKind::Queen => "QUEEN",
            PieceKind::King => "KING",
        }
    }

    /// Parse a piece name (case-insensitive).
    pub fn from_name(name: &str) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Return the fingerprint character for this piece kind (lowercase).
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a fingerprint character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Bishops, rooks and queens move along rays.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Knights and bishops.
    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }

    /// Whether a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
