//! Front-end errors.

use rookery_core::{FenError, RequestError};

/// Errors that can occur while reading and executing commands.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The first word of the line is not a known command.
    #[error("unknown command: {command}")]
    UnknownCommand { command: String },

    /// A command was given without a required argument.
    #[error("{command}: missing argument")]
    MissingArgument { command: &'static str },

    /// An argument could not be understood.
    #[error("{command}: invalid argument {value}")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },

    /// The move text could not be parsed into a request.
    #[error("invalid move: {source}")]
    Request {
        #[from]
        source: RequestError,
    },

    /// The position text could not be loaded.
    #[error("invalid position: {source}")]
    Fen {
        #[from]
        source: FenError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
