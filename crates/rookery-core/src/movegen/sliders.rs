//! Bishop, rook, and queen move generation.

use crate::attacks::slider_directions;
use crate::attacks::tables::Ray;
use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::piece::PieceId;
use crate::square_set::SquareSet;

use super::{MoveList, step_kind};

/// Walk each ray until blocked; the first enemy blocker is a capture.
pub(super) fn gen_slider(board: &Board, id: PieceId, allowed: SquareSet, list: &mut MoveList) {
    let slider = board.piece(id);
    let from = slider.square();
    for &step in slider_directions(slider.kind()) {
        for to in Ray::new(from, step) {
            let Some(kind) = step_kind(board, slider, to) else {
                break;
            };
            if allowed.contains(to) {
                list.push(Move::new(slider.color(), id, slider.kind(), from, to, kind));
            }
            if kind == MoveKind::Capture {
                break;
            }
        }
    }
}
