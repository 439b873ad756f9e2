//! Move requests: what a caller asks the board to play.

use std::fmt;
use std::str::FromStr;

use crate::chess_move::Move;
use crate::error::RequestError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A requested move, named by piece kind and squares.
///
/// The board resolves the request against its legal moves; the move kind is
/// never part of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub piece: PieceKind,
    pub from: Square,
    pub to: Square,
    /// Piece a pawn promotes to. `None` means queen when promoting.
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    pub fn new(piece: PieceKind, from: Square, to: Square) -> MoveRequest {
        MoveRequest {
            piece,
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(self, promotion: PieceKind) -> MoveRequest {
        MoveRequest {
            promotion: Some(promotion),
            ..self
        }
    }
}

impl From<&Move> for MoveRequest {
    fn from(mv: &Move) -> MoveRequest {
        MoveRequest {
            piece: mv.piece_kind(),
            from: mv.from(),
            to: mv.to(),
            promotion: mv.promotion(),
        }
    }
}

impl From<Move> for MoveRequest {
    fn from(mv: Move) -> MoveRequest {
        MoveRequest::from(&mv)
    }
}

fn parse_piece(token: &str) -> Result<PieceKind, RequestError> {
    PieceKind::from_name(token).ok_or_else(|| RequestError::UnknownPiece(token.to_string()))
}

fn parse_square(token: &str) -> Result<Square, RequestError> {
    Square::from_name(token).ok_or_else(|| RequestError::UnknownSquare(token.to_string()))
}

/// Parses `"PAWN E2 E4"`, `"knight g1 f3"`, `"PAWN E7 E8 KNIGHT"`, and the
/// display form `"PAWN: E7 -> E8 (PROMOTION: KNIGHT)"`.
impl FromStr for MoveRequest {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .chars()
            .map(|c| if matches!(c, ':' | '(' | ')') { ' ' } else { c })
            .collect();
        let tokens: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|t| *t != "->" && !t.eq_ignore_ascii_case("PROMOTION"))
            .collect();

        let (piece, from, to, promotion) = match tokens.as_slice() {
            [piece, from, to] => (piece, from, to, None),
            [piece, from, to, promotion] => (piece, from, to, Some(promotion)),
            _ => return Err(RequestError::Malformed(s.trim().to_string())),
        };

        let mut request = MoveRequest::new(parse_piece(piece)?, parse_square(from)?, parse_square(to)?);
        if let Some(promotion) = promotion {
            request = request.with_promotion(parse_piece(promotion)?);
        }
        Ok(request)
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.piece, self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, " (PROMOTION: {promotion})")?;
        }
        Ok(())
    }
}
