//! Material balance.
//!
//! Sums the signed value of every live piece. Kings are counted on both
//! sides and cancel out.

use rookery_core::{Board, Color};

/// Material balance from White's perspective (positive = White ahead).
pub fn material(board: &Board) -> i32 {
    Color::ALL
        .into_iter()
        .flat_map(|color| board.pieces(color))
        .map(|piece| piece.value())
        .sum()
}
