//! Pieces on the board, addressed through an arena index.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Index of a piece in the board's piece arena.
///
/// Ids are handed out in creation order and stay valid while the piece is
/// captured, so undo can put the same piece back.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    /// Arena slot of this piece.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PieceId({})", self.0)
    }
}

/// An absolute pin: the pinned piece may only move onto `path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    /// The slider doing the pinning.
    pub pinner: PieceId,
    /// The pinner's square plus every square strictly between the pinner and
    /// the king, minus the pinned piece's own square.
    pub path: SquareSet,
}

/// A colored piece with its position and bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) color: Color,
    pub(crate) square: Square,
    pub(crate) move_count: u16,
    pub(crate) pin: Option<Pin>,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, color: Color, square: Square, move_count: u16) -> Piece {
        Piece {
            kind,
            color,
            square,
            move_count,
            pin: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Square the piece stands on, or last stood on if it has been captured.
    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    /// Number of times this piece has moved; 0 means never.
    #[inline]
    pub fn move_count(&self) -> u16 {
        self.move_count
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// Current pin, if this piece is absolutely pinned to its king.
    #[inline]
    pub fn pin(&self) -> Option<Pin> {
        self.pin
    }

    /// Signed material value: positive for White, negative for Black.
    #[inline]
    pub fn value(&self) -> i32 {
        self.color.sign() * self.kind.value()
    }

    /// Fingerprint character: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}
