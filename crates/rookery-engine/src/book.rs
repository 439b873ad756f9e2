//! Scripted opening repertoires.
//!
//! A book maps exact placements to the move its side plays there. Lines are
//! written as move requests and replayed from the starting position, so a
//! book can only ever contain positions that arise in play.

use std::collections::HashMap;

use rookery_core::{Board, Color, MoveRequest};
use tracing::{debug, warn};

use crate::error::BookError;

/// London System lines for White.
const LONDON: &[&[&str]] = &[
    &[
        "PAWN D2 D4", "PAWN D7 D5", "BISHOP C1 F4", "BISHOP C8 F5", "PAWN E2 E3", "PAWN E7 E6",
        "KNIGHT G1 F3", "KNIGHT B8 C6", "KNIGHT B1 D2", "KNIGHT G8 F6", "PAWN C2 C4",
    ],
    &[
        "PAWN D2 D4", "PAWN D7 D5", "BISHOP C1 F4", "PAWN C7 C5", "PAWN E2 E3", "KNIGHT B8 C6",
        "KNIGHT G1 F3",
    ],
    &[
        "PAWN D2 D4", "PAWN D7 D5", "BISHOP C1 F4", "KNIGHT G8 F6", "PAWN E2 E3", "BISHOP C8 F5",
        "BISHOP F1 D3",
    ],
    &[
        "PAWN D2 D4", "KNIGHT G8 F6", "BISHOP C1 F4", "PAWN D7 D5", "PAWN E2 E3", "PAWN E7 E6",
        "KNIGHT G1 F3",
    ],
];

/// Caro-Kann lines for Black, plus a reply to 1.d4.
const CARO_KANN: &[&[&str]] = &[
    &[
        "PAWN E2 E4", "PAWN C7 C6", "PAWN D2 D4", "PAWN D7 D5", "PAWN E4 E5", "BISHOP C8 F5",
        "KNIGHT G1 F3", "PAWN E7 E6",
    ],
    &[
        "PAWN E2 E4", "PAWN C7 C6", "PAWN D2 D4", "PAWN D7 D5", "PAWN E4 D5", "PAWN C6 D5",
        "PAWN C2 C4", "KNIGHT G8 F6",
    ],
    &[
        "PAWN E2 E4", "PAWN C7 C6", "PAWN D2 D4", "PAWN D7 D5", "KNIGHT B1 C3", "PAWN D5 E4",
        "KNIGHT C3 E4", "KNIGHT G8 F6", "KNIGHT E4 F6", "PAWN E7 F6", "KNIGHT G1 F3",
        "BISHOP F8 D6", "BISHOP F1 E2", "KING E8 G8",
    ],
    &["PAWN E2 E4", "PAWN C7 C6", "KNIGHT G1 F3", "PAWN D7 D5"],
    &["PAWN D2 D4", "PAWN C7 C6", "PAWN C2 C4", "PAWN D7 D5"],
];

/// Opening repertoire for one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningBook {
    side: Color,
    entries: HashMap<String, MoveRequest>,
}

impl OpeningBook {
    /// Build a book for `side` by replaying each line from the start.
    ///
    /// Only positions where `side` is to move are recorded.
    ///
    /// # Errors
    ///
    /// Fails if a move cannot be parsed, is illegal where it is played, or
    /// two lines disagree about the reply to the same position.
    pub fn from_lines(side: Color, lines: &[&[&str]]) -> Result<Self, BookError> {
        let mut entries: HashMap<String, MoveRequest> = HashMap::new();

        for (line, moves) in lines.iter().enumerate() {
            let mut board = Board::starting_position();
            for (ply, text) in moves.iter().enumerate() {
                let request: MoveRequest = text
                    .parse()
                    .map_err(|source| BookError::Request { line, ply, source })?;

                if board.side_to_move() == side {
                    let fingerprint = board.fingerprint();
                    match entries.get(&fingerprint) {
                        Some(existing) if *existing != request => {
                            return Err(BookError::Conflict {
                                line,
                                ply,
                                fingerprint,
                            });
                        }
                        Some(_) => {}
                        None => {
                            entries.insert(fingerprint, request);
                        }
                    }
                }

                board
                    .apply_move(&request)
                    .map_err(|source| BookError::Illegal { line, ply, source })?;
            }
        }

        debug!(side = %side, positions = entries.len(), "opening book built");
        Ok(Self { side, entries })
    }

    /// London System repertoire for White.
    pub fn london() -> Self {
        Self::from_lines(Color::White, LONDON).expect("built-in London lines replay legally")
    }

    /// Caro-Kann repertoire for Black.
    pub fn caro_kann() -> Self {
        Self::from_lines(Color::Black, CARO_KANN).expect("built-in Caro-Kann lines replay legally")
    }

    /// The built-in repertoire for `side`.
    pub fn for_side(side: Color) -> Self {
        match side {
            Color::White => Self::london(),
            Color::Black => Self::caro_kann(),
        }
    }

    pub fn side(&self) -> Color {
        self.side
    }

    /// Number of positions with a scripted reply.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The scripted reply for this position, if it is legal here.
    pub fn lookup(&self, board: &Board) -> Option<MoveRequest> {
        if board.side_to_move() != self.side {
            return None;
        }
        let request = *self.entries.get(&board.fingerprint())?;
        if board.is_legal(&request) {
            Some(request)
        } else {
            warn!(%request, "book move is not legal here");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rookery_core::{Board, Color, MoveRequest};

    use super::{CARO_KANN, LONDON, OpeningBook};
    use crate::error::BookError;

    fn play(board: &mut Board, text: &str) {
        board
            .apply_move(&text.parse::<MoveRequest>().unwrap())
            .unwrap();
    }

    #[test]
    fn built_in_books_replay() {
        assert!(OpeningBook::from_lines(Color::White, LONDON).is_ok());
        assert!(OpeningBook::from_lines(Color::Black, CARO_KANN).is_ok());
    }

    #[test]
    fn london_opens_with_the_queen_pawn() {
        let book = OpeningBook::london();
        let board = Board::starting_position();
        assert_eq!(
            book.lookup(&board).map(|r| r.to_string()),
            Some("PAWN: D2 -> D4".to_string())
        );
    }

    #[test]
    fn london_branches_share_a_prefix() {
        let book = OpeningBook::london();
        let mut board = Board::starting_position();
        play(&mut board, "PAWN D2 D4");
        play(&mut board, "KNIGHT G8 F6");
        assert_eq!(
            book.lookup(&board).map(|r| r.to_string()),
            Some("BISHOP: C1 -> F4".to_string())
        );
    }

    #[test]
    fn caro_kann_answers_both_center_pawns() {
        let book = OpeningBook::caro_kann();
        for first in ["PAWN E2 E4", "PAWN D2 D4"] {
            let mut board = Board::starting_position();
            play(&mut board, first);
            assert_eq!(
                book.lookup(&board).map(|r| r.to_string()),
                Some("PAWN: C7 -> C6".to_string())
            );
        }
    }

    #[test]
    fn lookup_ignores_the_other_side() {
        let book = OpeningBook::caro_kann();
        assert!(book.lookup(&Board::starting_position()).is_none());
    }

    #[test]
    fn unknown_position_has_no_entry() {
        let book = OpeningBook::london();
        let mut board = Board::starting_position();
        play(&mut board, "PAWN A2 A3");
        play(&mut board, "PAWN A7 A6");
        assert!(book.lookup(&board).is_none());
    }

    #[test]
    fn illegal_line_is_rejected() {
        let err = OpeningBook::from_lines(Color::White, &[&["PAWN E2 E5"]]).unwrap_err();
        assert!(matches!(err, BookError::Illegal { line: 0, ply: 0, .. }));
    }

    #[test]
    fn conflicting_lines_are_rejected() {
        let err =
            OpeningBook::from_lines(Color::White, &[&["PAWN E2 E4"], &["PAWN D2 D4"]]).unwrap_err();
        assert!(matches!(err, BookError::Conflict { line: 1, ply: 0, .. }));
    }

    #[test]
    fn malformed_move_is_rejected() {
        let err = OpeningBook::from_lines(Color::White, &[&["WIZARD E2 E4"]]).unwrap_err();
        assert!(matches!(err, BookError::Request { line: 0, ply: 0, .. }));
    }
}
