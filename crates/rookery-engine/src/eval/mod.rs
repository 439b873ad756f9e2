//! Static evaluation.
//!
//! Scores are centipawns from White's point of view: White's search
//! maximizes them, Black's minimizes them.

pub mod development;
pub mod material;

use rookery_core::{Board, GameStatus};

/// Heuristic adjustments applied on top of raw material, in centipawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    /// Charged for every knight or bishop that has not left its square.
    pub undeveloped_minor: i32,
    /// Credited to a side that has castled.
    pub castled: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            undeveloped_minor: 33,
            castled: 33,
        }
    }
}

/// Evaluate the position from White's perspective.
pub fn evaluate(board: &Board, weights: &EvalWeights) -> i32 {
    material::material(board) + development::development(board, weights)
}

/// Classify the position and record its status and evaluation on the board.
pub fn refresh(board: &mut Board, weights: &EvalWeights) -> GameStatus {
    let status = board.detect_status();
    let value = evaluate(board, weights);
    board.record_evaluation(status, value);
    status
}

#[cfg(test)]
mod tests {
    use rookery_core::{Board, Color, DrawReason, GameStatus, MoveRequest};

    use super::{EvalWeights, evaluate, refresh};

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(evaluate(&board, &EvalWeights::default()), 0);
    }

    #[test]
    fn developing_a_knight_gains_the_penalty_back() {
        let mut board = Board::starting_position();
        board
            .apply_move(&"KNIGHT G1 F3".parse::<MoveRequest>().unwrap())
            .unwrap();
        assert_eq!(evaluate(&board, &EvalWeights::default()), 33);
    }

    #[test]
    fn refresh_records_status_and_value() {
        let mut board: Board = "4k3/8/8/8/8/1b6/8/3BK3".parse().unwrap();
        let status = refresh(&mut board, &EvalWeights::default());
        assert_eq!(status, GameStatus::Draw(DrawReason::InsufficientMaterial));
        assert_eq!(board.status(), status);
        assert_eq!(board.value(), evaluate(&board, &EvalWeights::default()));
    }

    #[test]
    fn refresh_reports_checkmate() {
        // Back-rank mate: rook on a8, black king boxed in by its own pawns.
        let mut board: Board = "R5k1/5ppp/8/8/8/8/8/6K1 b".parse().unwrap();
        let status = refresh(&mut board, &EvalWeights::default());
        assert_eq!(status, GameStatus::Checkmate { loser: Color::Black });
    }
}
