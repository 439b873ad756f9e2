//! Development terms: idle minor pieces and castling.

use rookery_core::{Board, Color};

use super::EvalWeights;

/// Development score from White's perspective.
///
/// Each knight or bishop that has never moved costs its side
/// `undeveloped_minor`; a side that has castled earns `castled`.
pub fn development(board: &Board, weights: &EvalWeights) -> i32 {
    Color::ALL
        .into_iter()
        .map(|color| side_development(board, color, weights) * color.sign())
        .sum()
}

fn side_development(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    let idle = board
        .pieces(color)
        .filter(|piece| piece.kind().is_minor() && !piece.has_moved())
        .count() as i32;

    let mut score = -idle * weights.undeveloped_minor;
    if board.has_castled(color) {
        score += weights.castled;
    }
    score
}
