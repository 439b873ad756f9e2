//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The tree is walked in place: every move is played with
//! [`Board::make_move`] and taken back with [`Board::undo_move`].

use rookery_core::{Board, Color, Move, REPETITION_LIMIT, generate_legal_moves};
use tracing::trace;

use crate::eval::{EvalWeights, evaluate};
use crate::search::ordering::MovePicker;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 30_000;

/// Base score for checkmate (adjusted by ply for mate distance).
pub const MATE_SCORE: i32 = 29_000;

/// Scores beyond this magnitude indicate a forced mate.
pub const MATE_THRESHOLD: i32 = 28_000;

/// Per-search state threaded through the recursion.
pub(super) struct SearchContext<'a> {
    pub nodes: u64,
    pub weights: &'a EvalWeights,
}

/// Score for the side to move having been mated `ply` plies from the root,
/// from White's perspective.
pub fn mated_score(loser: Color, ply: u8) -> i32 {
    -loser.sign() * (MATE_SCORE - ply as i32)
}

/// Search the root and return the best move with its score.
///
/// Returns `None` for the move when the side to move has no legal moves.
pub(super) fn search_root(
    board: &mut Board,
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> (Option<Move>, i32) {
    ctx.nodes += 1;
    let us = board.side_to_move();
    let moves = generate_legal_moves(board);
    if moves.is_empty() {
        let score = if board.is_in_check(us) {
            mated_score(us, 0)
        } else {
            0
        };
        return (None, score);
    }

    let maximizing = us == Color::White;
    let mut alpha = -INF;
    let mut beta = INF;
    let mut best_score = if maximizing { -INF } else { INF };
    let mut best_move = None;
    let mut picker = MovePicker::new(&moves, board);

    while let Some(mv) = picker.pick_next() {
        board.make_move(mv);
        let score = minimax(board, depth.saturating_sub(1), 1, alpha, beta, ctx);
        board.undo_move();
        trace!(%mv, score, "root move");

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves || best_move.is_none() {
            best_score = score;
            best_move = Some(mv);
        }
        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
    }

    (best_move, best_score)
}

/// Minimax value of the position, White maximizing and Black minimizing.
///
/// Terminal positions are scored before the depth cutoff: checkmate as
/// [`MATE_SCORE`] less the ply distance, stalemate and draws as zero.
pub(super) fn minimax(
    board: &mut Board,
    depth: u8,
    ply: u8,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;
    let us = board.side_to_move();

    let moves = generate_legal_moves(board);
    if moves.is_empty() {
        return if board.is_in_check(us) {
            mated_score(us, ply)
        } else {
            0
        };
    }

    if board.repetition_count(&board.fingerprint()) >= REPETITION_LIMIT
        || board.has_insufficient_material()
    {
        return 0;
    }

    if depth == 0 {
        return evaluate(board, ctx.weights);
    }

    let maximizing = us == Color::White;
    let mut best = if maximizing { -INF } else { INF };
    let mut picker = MovePicker::new(&moves, board);

    while let Some(mv) = picker.pick_next() {
        board.make_move(mv);
        let score = minimax(board, depth - 1, ply + 1, alpha, beta, ctx);
        board.undo_move();

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        if alpha >= beta {
            break;
        }
    }

    best
}
