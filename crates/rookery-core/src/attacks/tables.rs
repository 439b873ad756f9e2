//! Step offsets and ray walking on the 8x8 grid.

use crate::square::Square;

/// Knight jumps as (row, col) deltas.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

/// King steps, which double as the eight ray directions.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Rook directions.
pub const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop directions.
pub const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walks from a square in one direction until the edge of the board.
///
/// The starting square is not yielded.
#[derive(Debug, Clone)]
pub struct Ray {
    next: Option<Square>,
    step: (i8, i8),
}

impl Ray {
    pub fn new(from: Square, step: (i8, i8)) -> Ray {
        Ray {
            next: from.offset(step.0, step.1),
            step,
        }
    }
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next?;
        self.next = current.offset(self.step.0, self.step.1);
        Some(current)
    }
}

/// Unit step from `from` toward `to` if they share a rank, file, or diagonal.
pub fn direction(from: Square, to: Square) -> Option<(i8, i8)> {
    if from == to {
        return None;
    }
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    if d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs() {
        Some((d_row.signum(), d_col.signum()))
    } else {
        None
    }
}

/// Squares strictly between two aligned squares; empty when not aligned.
pub fn between(from: Square, to: Square) -> Vec<Square> {
    match direction(from, to) {
        Some(step) => Ray::new(from, step).take_while(|&sq| sq != to).collect(),
        None => Vec::new(),
    }
}
