//! Search algorithms and move ordering.

pub mod minimax;
pub mod ordering;

use rookery_core::{Board, Move};
use tracing::debug;

use crate::eval::EvalWeights;
use minimax::{SearchContext, search_root};

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u8 = 3;

/// Tunable search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched from the root.
    pub depth: u8,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            weights: EvalWeights::default(),
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, or `None` if the side to move has no legal moves.
    pub best_move: Option<Move>,
    /// Evaluation in centipawns from White's perspective.
    pub score: i32,
    /// Total nodes visited during the search.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
}

/// Fixed-depth alpha-beta searcher.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Change the search depth; zero is raised to one.
    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth.max(1);
    }

    /// Search the position for the side to move.
    ///
    /// The board is explored in place and is left exactly as it was given.
    pub fn search(&self, board: &mut Board) -> SearchResult {
        let depth = self.config.depth.max(1);
        let mut ctx = SearchContext {
            nodes: 0,
            weights: &self.config.weights,
        };

        let (best_move, score) = search_root(board, depth, &mut ctx);
        let result = SearchResult {
            best_move,
            score,
            nodes: ctx.nodes,
            depth,
        };

        debug!(
            best = ?result.best_move.map(|mv| mv.to_string()),
            score = result.score,
            nodes = result.nodes,
            depth = result.depth,
            "search finished"
        );
        result
    }
}
