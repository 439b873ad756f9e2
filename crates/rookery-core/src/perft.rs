//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::movegen::generate_legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        board.make_move(mv);
        nodes += perft(board, depth - 1);
        board.undo_move();
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &mut Board, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_legal_moves(board);
    let mut results: Vec<(String, u64)> = moves
        .into_iter()
        .map(|mv| {
            board.make_move(mv);
            let count = if depth <= 1 { 1 } else { perft(board, depth - 1) };
            board.undo_move();
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    // --- Starting position ---

    #[test]
    fn perft_startpos_depth_1() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 3), 8_902);
    }

    // --- Kiwipete ---
    // r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w

    fn kiwipete() -> Board {
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w"
            .parse()
            .unwrap()
    }

    #[test]
    fn perft_kiwipete_depth_1() {
        assert_eq!(perft(&mut kiwipete(), 1), 48);
    }

    #[test]
    fn perft_kiwipete_depth_2() {
        assert_eq!(perft(&mut kiwipete(), 2), 2_039);
    }

    // --- Rook and pawn endgame ---
    // 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w

    fn position3() -> Board {
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w".parse().unwrap()
    }

    #[test]
    fn perft_pos3_depth_1() {
        assert_eq!(perft(&mut position3(), 1), 14);
    }

    #[test]
    fn perft_pos3_depth_2() {
        assert_eq!(perft(&mut position3(), 2), 191);
    }

    #[test]
    fn perft_pos3_depth_3() {
        assert_eq!(perft(&mut position3(), 3), 2_812);
    }

    #[test]
    fn perft_leaves_board_unchanged() {
        let mut board = kiwipete();
        let before = board.clone();
        perft(&mut board, 2);
        assert_eq!(board, before);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::starting_position();
        let split = divide(&mut board, 2);
        assert_eq!(split.len(), 20);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 400);
        assert!(split.iter().any(|(mv, n)| mv == "e2e4" && *n == 20));
    }
}
