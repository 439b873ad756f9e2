//! Squares that resolve a single check.

use crate::attacks::between;
use crate::board::Board;
use crate::piece::PieceId;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Squares a non-king piece may move to while `checker` gives check: the
/// checker's own square, plus the blocking squares when it is a slider.
pub(super) fn check_path(board: &Board, king_sq: Square, checker: PieceId) -> SquareSet {
    let piece = board.piece(checker);
    let path = SquareSet::from_square(piece.square());
    if piece.kind().is_slider() {
        between(king_sq, piece.square())
            .into_iter()
            .fold(path, |set, sq| set.with(sq))
    } else {
        path
    }
}
