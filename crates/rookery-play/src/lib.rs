//! Line-oriented text front end for rookery.

pub mod command;
pub mod error;
pub mod game;

pub use command::{Command, Setting, parse_command};
pub use error::PlayError;
pub use game::{Game, GameConfig};
