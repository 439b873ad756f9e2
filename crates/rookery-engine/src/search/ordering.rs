//! Move ordering via MVV-LVA.
//!
//! Ordering only changes how quickly alpha-beta prunes, never the score it
//! returns.

use rookery_core::{Board, Move, MoveKind, MoveList, PieceKind};

/// MVV-LVA scores indexed by `[victim][attacker]`.
///
/// Weights: Pawn=1, Knight=3, Bishop=3, Rook=5, Queen=9, King=0.
/// Formula: `victim_weight * 16 - attacker_weight`.
const MVV_LVA: [[i32; 6]; 6] = [
    // victim = Pawn (weight 1)
    [15, 13, 13, 11, 7, 16],
    // victim = Knight (weight 3)
    [47, 45, 45, 43, 39, 48],
    // victim = Bishop (weight 3)
    [47, 45, 45, 43, 39, 48],
    // victim = Rook (weight 5)
    [79, 77, 77, 75, 71, 80],
    // victim = Queen (weight 9)
    [143, 141, 141, 139, 135, 144],
    // victim = King (weight 0)
    [-1, -3, -3, -5, -9, 0],
];

/// Score a move for ordering. Higher scores are searched first.
///
/// - Queen promotions: 2,000 (plus MVV-LVA when capturing)
/// - Captures: 1,000 + MVV-LVA
/// - Under-promotions: 170 (rook), 160 (bishop or knight)
/// - Castling: 50
/// - Quiet: 0
pub fn score_move(board: &Board, mv: Move) -> i32 {
    let capture = match mv.kind() {
        MoveKind::Capture => board
            .piece_at(mv.to())
            .map_or(0, |victim| 1_000 + MVV_LVA[victim.kind().index()][mv.piece_kind().index()]),
        MoveKind::EnPassant => 1_000 + MVV_LVA[PieceKind::Pawn.index()][PieceKind::Pawn.index()],
        MoveKind::Castle => return 50,
        MoveKind::Quiet => 0,
    };

    let promotion = match mv.promotion() {
        Some(PieceKind::Queen) => 2_000,
        Some(PieceKind::Rook) => 170,
        Some(_) => 160,
        None => 0,
    };

    capture + promotion
}

/// Incremental move picker using selection sort.
///
/// Scores are computed up front, so the picker holds no borrow of the
/// board and the caller is free to play each move it yields.
pub struct MovePicker {
    moves: Vec<Move>,
    scores: Vec<i32>,
    cursor: usize,
}

impl MovePicker {
    pub fn new(moves: &MoveList, board: &Board) -> Self {
        let moves: Vec<Move> = moves.iter().copied().collect();
        let scores = moves.iter().map(|&mv| score_move(board, mv)).collect();
        Self {
            moves,
            scores,
            cursor: 0,
        }
    }

    /// Yield the highest-scored move not yet returned.
    pub fn pick_next(&mut self) -> Option<Move> {
        if self.cursor >= self.moves.len() {
            return None;
        }

        let mut best = self.cursor;
        for i in (self.cursor + 1)..self.moves.len() {
            if self.scores[i] > self.scores[best] {
                best = i;
            }
        }

        self.moves.swap(self.cursor, best);
        self.scores.swap(self.cursor, best);
        let mv = self.moves[self.cursor];
        self.cursor += 1;
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use rookery_core::{Board, MoveKind, PieceKind, generate_legal_moves};

    use super::{MovePicker, score_move};

    #[test]
    fn picker_yields_every_move_once() {
        let board = Board::starting_position();
        let moves = generate_legal_moves(&board);
        let mut picker = MovePicker::new(&moves, &board);
        let mut count = 0;
        while picker.pick_next().is_some() {
            count += 1;
        }
        assert_eq!(count, moves.len());
    }

    #[test]
    fn captures_come_first_most_valuable_victim_leading() {
        // White knight on d4 can take a pawn on c6 or a queen on b5.
        let board: Board = "4k3/8/2p5/1q6/3N4/8/8/4K3".parse().unwrap();
        let moves = generate_legal_moves(&board);
        let mut picker = MovePicker::new(&moves, &board);

        let first = picker.pick_next().unwrap();
        assert_eq!(first.kind(), MoveKind::Capture);
        assert_eq!(first.to().to_string(), "B5");

        let second = picker.pick_next().unwrap();
        assert_eq!(second.kind(), MoveKind::Capture);
        assert_eq!(second.to().to_string(), "C6");

        let third = picker.pick_next().unwrap();
        assert!(!third.is_capture());
    }

    #[test]
    fn castling_outranks_quiet_moves() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R".parse().unwrap();
        let moves = generate_legal_moves(&board);
        let mut picker = MovePicker::new(&moves, &board);
        assert_eq!(picker.pick_next().unwrap().kind(), MoveKind::Castle);
    }

    #[test]
    fn queen_promotion_scores_highest() {
        let board: Board = "4k3/P7/8/8/8/8/8/4K3".parse().unwrap();
        let moves = generate_legal_moves(&board);
        let best = moves
            .iter()
            .copied()
            .max_by_key(|&mv| score_move(&board, mv))
            .unwrap();
        assert_eq!(best.promotion(), Some(PieceKind::Queen));
    }

    #[test]
    fn empty_list_yields_nothing() {
        // Black is stalemated in the corner.
        let board: Board = "k7/2Q5/1K6/8/8/8/8/8 b".parse().unwrap();
        let moves = generate_legal_moves(&board);
        assert!(moves.is_empty());
        let mut picker = MovePicker::new(&moves, &board);
        assert!(picker.pick_next().is_none());
    }
}
