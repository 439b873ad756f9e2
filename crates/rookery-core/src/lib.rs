//! Chess rules: board model, attack and pin analysis, legal move generation,
//! move execution with exact undo, and terminal-state detection.

pub mod attacks;
mod board;
mod castle;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
pub mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod receipt;
mod request;
mod square;
mod square_set;
mod status;

pub use board::{Board, PrettyBoard};
pub use castle::CastleSide;
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError, MoveError, RequestError};
pub use fen::STARTING_FINGERPRINT;
pub use movegen::{MoveList, generate_legal_moves};
pub use piece::{Piece, PieceId, Pin};
pub use piece_kind::PieceKind;
pub use receipt::Receipt;
pub use request::MoveRequest;
pub use square::Square;
pub use square_set::SquareSet;
pub use status::{DrawReason, GameStatus, INSUFFICIENT_MATERIAL_FLOOR, REPETITION_LIMIT};
