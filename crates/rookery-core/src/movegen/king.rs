//! King move generation, including castling.

use crate::attacks::tables::KING_OFFSETS;
use crate::board::Board;
use crate::castle::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::PieceId;
use crate::piece_kind::PieceKind;

use super::{MoveList, step_kind};

/// Return `true` if `color` may castle toward `side` right now.
///
/// Requires an unmoved king and rook, empty squares between them, and no
/// enemy attack on the king's square, the square it crosses, or the square
/// it lands on.
pub fn can_castle(board: &Board, color: Color, side: CastleSide) -> bool {
    let king = board.piece(board.king(color));
    if king.has_moved() || king.square() != CastleSide::king_from(color) {
        return false;
    }

    let rook_unmoved = board.piece_at(side.rook_from(color)).is_some_and(|rook| {
        rook.kind() == PieceKind::Rook && rook.color() == color && !rook.has_moved()
    });
    if !rook_unmoved {
        return false;
    }

    if side.between(color).into_iter().any(|sq| board.occupant(sq).is_some()) {
        return false;
    }

    let them = color.flip();
    side.king_path(color)
        .into_iter()
        .all(|sq| !board.is_attacked_by(sq, them))
}

/// Generate king steps onto unattacked squares, then castling.
pub(super) fn gen_king(board: &Board, id: PieceId, list: &mut MoveList) {
    let king = board.piece(id);
    let us = king.color();
    let them = us.flip();
    let from = king.square();

    for (d_row, d_col) in KING_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.is_attacked_by(to, them) {
            continue;
        }
        if let Some(kind) = step_kind(board, king, to) {
            list.push(Move::new(us, id, PieceKind::King, from, to, kind));
        }
    }

    for side in CastleSide::ALL {
        if can_castle(board, us, side) {
            list.push(Move::new(
                us,
                id,
                PieceKind::King,
                from,
                side.king_to(us),
                MoveKind::Castle,
            ));
        }
    }
}

impl Board {
    /// Return `true` if `color` may castle toward `side` right now.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        can_castle(self, color, side)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::castle::CastleSide;
    use crate::chess_move::MoveKind;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::request::MoveRequest;
    use crate::square::Square;

    const OPEN_CASTLE: &str = "r3k2r/8/8/8/8/8/8/R3K2R";

    #[test]
    fn both_wings_available() {
        let board: Board = OPEN_CASTLE.parse().unwrap();
        assert!(board.can_castle(Color::White, CastleSide::Short));
        assert!(board.can_castle(Color::White, CastleSide::Long));
        let castles = board
            .legal_moves()
            .iter()
            .filter(|m| m.kind() == MoveKind::Castle)
            .count();
        assert_eq!(castles, 2);
    }

    #[test]
    fn moved_rook_forbids_castling() {
        let mut board: Board = OPEN_CASTLE.parse().unwrap();
        let out = MoveRequest::new(PieceKind::Rook, Square::H1, Square::H2);
        let back = MoveRequest::new(PieceKind::Rook, Square::H2, Square::H1);
        board.apply_move(&out).unwrap();
        board
            .apply_move(&MoveRequest::new(PieceKind::King, Square::E8, Square::D8))
            .unwrap();
        board.apply_move(&back).unwrap();
        assert!(!board.can_castle(Color::White, CastleSide::Short));
        assert!(board.can_castle(Color::White, CastleSide::Long));
    }

    #[test]
    fn moved_king_forbids_castling() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R4K1R".parse().unwrap();
        assert!(!board.can_castle(Color::White, CastleSide::Short));
        assert!(!board.can_castle(Color::White, CastleSide::Long));
    }

    #[test]
    fn occupied_between_forbids_castling() {
        let board: Board = "r3k2r/8/8/8/8/8/8/RN2K1NR".parse().unwrap();
        assert!(!board.can_castle(Color::White, CastleSide::Short));
        assert!(!board.can_castle(Color::White, CastleSide::Long));
    }

    #[test]
    fn attacked_transit_forbids_castling() {
        // Black rook on f8 covers f1.
        let board: Board = "4kr2/8/8/8/8/8/8/R3K2R".parse().unwrap();
        assert!(!board.can_castle(Color::White, CastleSide::Short));
        assert!(board.can_castle(Color::White, CastleSide::Long));
    }

    #[test]
    fn check_forbids_castling() {
        let board: Board = "4r1k1/8/8/8/8/8/8/R3K2R".parse().unwrap();
        assert!(board.is_in_check(Color::White));
        assert!(!board.can_castle(Color::White, CastleSide::Short));
        assert!(!board.can_castle(Color::White, CastleSide::Long));
    }

    #[test]
    fn attacked_b1_does_not_forbid_long_castling() {
        let board: Board = "1r2k3/8/8/8/8/8/8/R3K3".parse().unwrap();
        assert!(board.can_castle(Color::White, CastleSide::Long));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board: Board = "4k3/8/8/8/8/8/r7/4K3".parse().unwrap();
        let king_moves: Vec<_> = board
            .legal_moves()
            .into_iter()
            .filter(|m| m.piece_kind() == PieceKind::King)
            .map(|m| m.to())
            .collect();
        assert!(king_moves.iter().all(|sq| sq.rank() == 1));
        assert_eq!(king_moves.len(), 2);
    }

    #[test]
    fn king_cannot_retreat_along_checking_ray() {
        let board: Board = "4k3/8/8/8/8/8/8/r3K3".parse().unwrap();
        assert!(board
            .legal_moves()
            .iter()
            .all(|m| m.to() != Square::F1));
    }
}
