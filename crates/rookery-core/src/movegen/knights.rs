//! Knight move generation.

use crate::attacks::tables::KNIGHT_OFFSETS;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::PieceId;
use crate::square_set::SquareSet;

use super::{MoveList, step_kind};

/// Generate knight moves whose destination lies in `allowed`.
pub(super) fn gen_knight(board: &Board, id: PieceId, allowed: SquareSet, list: &mut MoveList) {
    let knight = board.piece(id);
    let from = knight.square();
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if !allowed.contains(to) {
            continue;
        }
        if let Some(kind) = step_kind(board, knight, to) {
            list.push(Move::new(knight.color(), id, knight.kind(), from, to, kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::MoveKind;
    use crate::square::Square;

    #[test]
    fn corner_knight_has_two_moves() {
        let board: Board = "4k3/8/8/8/8/8/8/N3K3".parse().unwrap();
        let moves: Vec<_> = board
            .legal_moves()
            .into_iter()
            .filter(|m| m.from() == Square::A1)
            .collect();
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn knight_captures_but_not_friends() {
        let board: Board = "4k3/8/8/8/8/1p6/2P5/N3K3".parse().unwrap();
        let moves: Vec<_> = board
            .legal_moves()
            .into_iter()
            .filter(|m| m.from() == Square::A1)
            .collect();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), Square::B3);
        assert_eq!(moves[0].kind(), MoveKind::Capture);
    }
}
