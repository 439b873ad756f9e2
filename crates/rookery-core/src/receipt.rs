//! Human-readable receipts for applied moves.

use std::fmt;

use crate::castle::CastleSide;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// What an applied move did, rendered for a UI by [`Display`](fmt::Display).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receipt {
    /// `"PAWN: E2 -> E4"`
    Moved {
        piece: PieceKind,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    /// `"BISHOP TAKES KNIGHT: C4 -> F7"`
    Captured {
        piece: PieceKind,
        captured: PieceKind,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    /// `"PAWN TAKES PAWN (EN PASSANT): E5 -> D6"`
    EnPassant { from: Square, to: Square },
    /// `"KING CASTLES SHORT"`
    Castled(CastleSide),
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let promotion = match *self {
            Receipt::Moved {
                piece,
                from,
                to,
                promotion,
            } => {
                write!(f, "{piece}: {from} -> {to}")?;
                promotion
            }
            Receipt::Captured {
                piece,
                captured,
                from,
                to,
                promotion,
            } => {
                write!(f, "{piece} TAKES {captured}: {from} -> {to}")?;
                promotion
            }
            Receipt::EnPassant { from, to } => {
                return write!(
                    f,
                    "{pawn} TAKES {pawn} (EN PASSANT): {from} -> {to}",
                    pawn = PieceKind::Pawn
                );
            }
            Receipt::Castled(side) => return write!(f, "KING CASTLES {side}"),
        };
        if let Some(promotion) = promotion {
            write!(f, " (PROMOTION: {promotion})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Receipt;
    use crate::castle::CastleSide;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn quiet_move() {
        let receipt = Receipt::Moved {
            piece: PieceKind::Pawn,
            from: Square::E2,
            to: Square::E4,
            promotion: None,
        };
        assert_eq!(receipt.to_string(), "PAWN: E2 -> E4");
    }

    #[test]
    fn capture_with_promotion() {
        let receipt = Receipt::Captured {
            piece: PieceKind::Pawn,
            captured: PieceKind::Rook,
            from: Square::B7,
            to: Square::A8,
            promotion: Some(PieceKind::Queen),
        };
        assert_eq!(
            receipt.to_string(),
            "PAWN TAKES ROOK: B7 -> A8 (PROMOTION: QUEEN)"
        );
    }

    #[test]
    fn quiet_promotion() {
        let receipt = Receipt::Moved {
            piece: PieceKind::Pawn,
            from: Square::E7,
            to: Square::E8,
            promotion: Some(PieceKind::Knight),
        };
        assert_eq!(receipt.to_string(), "PAWN: E7 -> E8 (PROMOTION: KNIGHT)");
    }

    #[test]
    fn en_passant() {
        let receipt = Receipt::EnPassant {
            from: Square::E5,
            to: Square::D6,
        };
        assert_eq!(receipt.to_string(), "PAWN TAKES PAWN (EN PASSANT): E5 -> D6");
    }

    #[test]
    fn castles() {
        assert_eq!(
            Receipt::Castled(CastleSide::Short).to_string(),
            "KING CASTLES SHORT"
        );
        assert_eq!(
            Receipt::Castled(CastleSide::Long).to_string(),
            "KING CASTLES LONG"
        );
    }
}
