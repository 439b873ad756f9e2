//! Legal move generation.
//!
//! Candidate destinations come from each piece's movement pattern and are
//! then narrowed by the check path (when in single check) and the pin path
//! (when pinned). In double check only the king moves.

mod check;
mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::check::check_path;
use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

pub use self::king::can_castle;
pub use self::pawns::en_passant_target;

/// Kinds a pawn may promote to, most valuable first.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generated moves for one position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(48),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Push a pawn move, expanding it into every promotion choice on the last row.
pub(crate) fn push_with_promotions(list: &mut MoveList, mv: Move) {
    if mv.piece_kind() == PieceKind::Pawn && mv.to().row() == mv.side().promotion_row() {
        for kind in PROMOTION_CHOICES {
            list.push(mv.with_promotion(kind));
        }
    } else {
        list.push(mv);
    }
}

/// Quiet move onto an empty square, capture onto an enemy, nothing onto a friend.
pub(crate) fn step_kind(board: &Board, mover: &Piece, to: Square) -> Option<MoveKind> {
    match board.piece_at(to) {
        None => Some(MoveKind::Quiet),
        Some(target) if target.color() != mover.color() => Some(MoveKind::Capture),
        Some(_) => None,
    }
}

/// Generate all legal moves for the side to move.
///
/// Reads the guards, checkers, and pins stored on the board, so the board
/// must have been refreshed since its last change.
pub fn generate_legal_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    let us = board.side_to_move();
    let king = board.king(us);
    let king_sq = board.king_square(us);
    let checkers = board.checkers(us);

    gen_king(board, king, &mut list);

    let check_mask = match checkers {
        [] => SquareSet::FULL,
        [checker] => check_path(board, king_sq, *checker),
        _ => return list,
    };

    for id in board.piece_ids(us) {
        if id == king {
            continue;
        }
        let piece = board.piece(id);
        let allowed = match piece.pin() {
            Some(pin) => check_mask & pin.path,
            None => check_mask,
        };
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(board, id, allowed, check_mask, &mut list),
            PieceKind::Knight => gen_knight(board, id, allowed, &mut list),
            PieceKind::King => {}
            _ => gen_slider(board, id, allowed, &mut list),
        }
    }

    list
}

impl Board {
    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        generate_legal_moves(self)
    }
}
