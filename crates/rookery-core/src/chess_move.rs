//! Resolved moves produced by the legal move generator.

use std::fmt;

use crate::castle::CastleSide;
use crate::color::Color;
use crate::piece::PieceId;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// How a move changes the board. Decided by the generator, never requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    Capture,
    EnPassant,
    Castle,
}

/// A legal move in a specific position.
///
/// Holds the arena id of the moving piece, so a move is only meaningful for
/// the board that generated it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    side: Color,
    piece: PieceId,
    piece_kind: PieceKind,
    from: Square,
    to: Square,
    kind: MoveKind,
    promotion: Option<PieceKind>,
}

impl Move {
    pub(crate) fn new(
        side: Color,
        piece: PieceId,
        piece_kind: PieceKind,
        from: Square,
        to: Square,
        kind: MoveKind,
    ) -> Move {
        Move {
            side,
            piece,
            piece_kind,
            from,
            to,
            kind,
            promotion: None,
        }
    }

    pub(crate) fn with_promotion(self, promotion: PieceKind) -> Move {
        Move {
            promotion: Some(promotion),
            ..self
        }
    }

    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    /// Kind of the moving piece before any promotion.
    #[inline]
    pub fn piece_kind(&self) -> PieceKind {
        self.piece_kind
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Captures and en passant both remove an enemy piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant)
    }

    /// Square of the piece this move removes, if any.
    ///
    /// For en passant that is the square beside the mover, on its own row.
    pub fn captured_square(&self) -> Option<Square> {
        match self.kind {
            MoveKind::Capture => Some(self.to),
            MoveKind::EnPassant => Square::new(self.from.row(), self.to.col()),
            MoveKind::Quiet | MoveKind::Castle => None,
        }
    }

    /// Wing of a castling move.
    pub fn castle_side(&self) -> Option<CastleSide> {
        if self.kind != MoveKind::Castle {
            return None;
        }
        CastleSide::from_king_move(self.side, self.from, self.to)
    }

    /// A pawn advancing two rows.
    pub fn is_double_push(&self) -> bool {
        self.piece_kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({} {} {}->{} {:?}",
            self.side, self.piece_kind, self.from, self.to, self.kind
        )?;
        if let Some(promotion) = self.promotion {
            write!(f, " ={promotion}")?;
        }
        write!(f, ")")
    }
}

/// Short coordinate form such as `e2e4` or `e7e8n`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.from.to_string().to_ascii_lowercase(),
            self.to.to_string().to_ascii_lowercase()
        )?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.fen_char())?;
        }
        Ok(())
    }
}
