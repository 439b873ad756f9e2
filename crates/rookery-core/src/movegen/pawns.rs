//! Pawn move generation: pushes, captures, en passant, and promotion.

use crate::attacks::slider_attacks_after;
use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::piece::PieceId;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::{MoveList, push_with_promotions};

/// En passant opportunity left by the previous move, as
/// `(destination, square of the pawn to capture)`.
///
/// Only exists right after an enemy pawn advanced two rows.
pub fn en_passant_target(board: &Board) -> Option<(Square, Square)> {
    let last = board.last_move()?;
    if !last.is_double_push() || last.side() == board.side_to_move() {
        return None;
    }
    let skipped = Square::new((last.from().row() + last.to().row()) / 2, last.to().col())?;
    Some((skipped, last.to()))
}

/// Generate moves for the pawn `id`.
///
/// `allowed` combines the check path and the pawn's pin path. En passant is
/// judged separately against `check_mask`, then by replaying the two
/// vacated squares, since removing two pieces from one row can expose the
/// king in a way no pin records.
pub(super) fn gen_pawn(
    board: &Board,
    id: PieceId,
    allowed: SquareSet,
    check_mask: SquareSet,
    list: &mut MoveList,
) {
    let pawn = board.piece(id);
    let us = pawn.color();
    let from = pawn.square();
    let dir = us.pawn_direction();
    let quiet = |to| Move::new(us, id, PieceKind::Pawn, from, to, MoveKind::Quiet);

    if let Some(one) = from.offset(dir, 0)
        && board.occupant(one).is_none()
    {
        if allowed.contains(one) {
            push_with_promotions(list, quiet(one));
        }
        if pawn.move_count() == 0
            && from.row() == us.pawn_row()
            && let Some(two) = one.offset(dir, 0)
            && board.occupant(two).is_none()
            && allowed.contains(two)
        {
            list.push(quiet(two));
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };
        if let Some(target) = board.piece_at(to)
            && target.color() != us
            && allowed.contains(to)
        {
            push_with_promotions(
                list,
                Move::new(us, id, PieceKind::Pawn, from, to, MoveKind::Capture),
            );
        }
    }

    let Some((to, victim_sq)) = en_passant_target(board) else {
        return;
    };
    if victim_sq.row() != from.row() || victim_sq.col().abs_diff(from.col()) != 1 {
        return;
    }
    if !check_mask.contains(to) && !check_mask.contains(victim_sq) {
        return;
    }
    let king_sq = board.king_square(us);
    if slider_attacks_after(board, king_sq, us.flip(), &[from, victim_sq], to) {
        return;
    }
    list.push(Move::new(us, id, PieceKind::Pawn, from, to, MoveKind::EnPassant));
}
