//! Error types for position loading, move requests, and move application.

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::request::MoveRequest;

/// Errors that occur when parsing a position fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The input holds no placement field at all.
    #[error("empty fingerprint")]
    Empty,
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// Two empty-run digits appear back to back, as in `"44"`.
    #[error("rank {rank_index} has consecutive empty-run digits")]
    ConsecutiveDigits {
        /// Zero-based rank index (0 = rank 8).
        rank_index: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidColor {
        /// The invalid token.
        found: String,
    },
    /// The placement parses but does not describe a playable position.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn found on back rank")]
    PawnOnBackRank,
    /// The side that just moved is left in check, so its king could be taken.
    #[error("{color} is in check but it is not {color}'s turn")]
    OpponentInCheck {
        /// The side not to move.
        color: Color,
    },
}

/// A move request rejected by the board. The board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece on {}", .request.from)]
    EmptySquare { request: MoveRequest },
    #[error("{} holds a {found}, not a {}", .request.from, .request.piece)]
    WrongPiece {
        request: MoveRequest,
        found: PieceKind,
    },
    #[error("it is {to_move}'s turn")]
    WrongTurn {
        request: MoveRequest,
        to_move: Color,
    },
    #[error("promotion is not allowed for {request}")]
    InvalidPromotion { request: MoveRequest },
    #[error("{request} is not a legal move")]
    Illegal { request: MoveRequest },
}

impl MoveError {
    /// The request that was rejected.
    pub fn request(&self) -> &MoveRequest {
        match self {
            MoveError::EmptySquare { request }
            | MoveError::WrongPiece { request, .. }
            | MoveError::WrongTurn { request, .. }
            | MoveError::InvalidPromotion { request }
            | MoveError::Illegal { request } => request,
        }
    }

    /// Rejection receipt, e.g. `"PAWN: E2 -> E5 is not a valid move"`.
    pub fn receipt(&self) -> String {
        let request = self.request();
        format!(
            "{}: {} -> {} is not a valid move",
            request.piece, request.from, request.to
        )
    }
}

/// Errors from parsing a textual move request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("expected <PIECE> <FROM> <TO> [PROMOTION], got \"{0}\"")]
    Malformed(String),
    #[error("unknown piece: \"{0}\"")]
    UnknownPiece(String),
    #[error("unknown square: \"{0}\"")]
    UnknownSquare(String),
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, MoveError};
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::request::MoveRequest;
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongRankCount { found: 7 };
        assert_eq!(format!("{err}"), "expected 8 ranks in piece placement, found 7");
    }

    #[test]
    fn fen_error_from_board_error() {
        let board_err = BoardError::InvalidKingCount {
            color: Color::Black,
            count: 0,
        };
        let fen_err: FenError = board_err.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
        assert_eq!(
            format!("{fen_err}"),
            "invalid board: expected 1 king for BLACK, found 0"
        );
    }

    #[test]
    fn move_error_receipt() {
        let request = MoveRequest::new(PieceKind::Pawn, Square::E2, Square::E5);
        let err = MoveError::Illegal { request };
        assert_eq!(err.receipt(), "PAWN: E2 -> E5 is not a valid move");
        assert_eq!(err.request().to, Square::E5);
    }

    #[test]
    fn wrong_piece_display() {
        let request = MoveRequest::new(PieceKind::Bishop, Square::B1, Square::C3);
        let err = MoveError::WrongPiece {
            request,
            found: PieceKind::Knight,
        };
        assert_eq!(format!("{err}"), "B1 holds a KNIGHT, not a BISHOP");
    }
}
