//! Evaluation, search, opening book and bot for rookery.

pub mod book;
pub mod bot;
pub mod error;
pub mod eval;
pub mod search;

pub use book::OpeningBook;
pub use bot::{Bot, Decision};
pub use error::BookError;
pub use eval::{EvalWeights, evaluate};
pub use search::{SearchConfig, SearchResult, Searcher};
