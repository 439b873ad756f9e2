//! Terminal-state detection.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::movegen::generate_legal_moves;
use crate::piece_kind::PieceKind;

/// Each side's non-king material must be below this (in centipawns), with no
/// pawns left, for the game to be drawn on material.
pub const INSUFFICIENT_MATERIAL_FLOOR: i32 = 410;

/// How often a placement must occur for a repetition draw.
pub const REPETITION_LIMIT: u32 = 3;

/// Why a game ended in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Repetition,
    InsufficientMaterial,
}

/// Whether the game is still going, and how it ended if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    /// The side to move is in check with no legal moves.
    Checkmate { loser: Color },
    /// The side to move is not in check and has no legal moves.
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ONGOING"),
            GameStatus::Checkmate { .. } => write!(f, "CHECKMATE"),
            GameStatus::Stalemate => write!(f, "STALEMATE"),
            GameStatus::Draw(DrawReason::Repetition) => write!(f, "DRAW (by repetition)"),
            GameStatus::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "DRAW (insufficient material)")
            }
        }
    }
}

impl Board {
    /// Classify the current position.
    ///
    /// Mate and stalemate are checked before either draw rule.
    pub fn detect_status(&self) -> GameStatus {
        let us = self.side_to_move();
        if generate_legal_moves(self).is_empty() {
            return if self.is_in_check(us) {
                GameStatus::Checkmate { loser: us }
            } else {
                GameStatus::Stalemate
            };
        }

        if self.repetition_count(&self.fingerprint()) >= REPETITION_LIMIT {
            return GameStatus::Draw(DrawReason::Repetition);
        }

        if self.has_insufficient_material() {
            return GameStatus::Draw(DrawReason::InsufficientMaterial);
        }

        GameStatus::Ongoing
    }

    /// No pawns on the board and both sides below the material floor.
    pub fn has_insufficient_material(&self) -> bool {
        let no_pawns = Color::ALL.into_iter().all(|color| {
            self.pieces(color)
                .all(|piece| piece.kind() != PieceKind::Pawn)
        });
        no_pawns
            && Color::ALL
                .into_iter()
                .all(|color| self.material(color) < INSUFFICIENT_MATERIAL_FLOOR)
    }
}
