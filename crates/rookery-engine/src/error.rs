//! Engine error types.

use rookery_core::{MoveError, RequestError};

/// Error produced while building an opening book from scripted lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    /// A move in a line could not be parsed.
    #[error("line {line}, ply {ply}: {source}")]
    Request {
        line: usize,
        ply: usize,
        source: RequestError,
    },

    /// A move in a line is not legal where it is played.
    #[error("line {line}, ply {ply}: {}", source.receipt())]
    Illegal {
        line: usize,
        ply: usize,
        source: MoveError,
    },

    /// Two lines script different replies to the same position.
    #[error("line {line}, ply {ply}: position {fingerprint} already has a different reply")]
    Conflict {
        line: usize,
        ply: usize,
        fingerprint: String,
    },
}
