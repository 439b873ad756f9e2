//! Computer player: book moves first, search afterwards.

use rookery_core::{Board, Color, MoveRequest};
use tracing::debug;

use crate::book::OpeningBook;
use crate::search::{SearchConfig, SearchResult, Searcher};

/// Longest game history, in plies, at which the book is still consulted.
pub const DEFAULT_BOOK_PLIES: usize = 15;

/// How the bot arrived at its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Book(MoveRequest),
    Search {
        request: MoveRequest,
        result: SearchResult,
    },
}

impl Decision {
    /// The move to play.
    pub fn request(&self) -> MoveRequest {
        match self {
            Decision::Book(request) | Decision::Search { request, .. } => *request,
        }
    }
}

/// A computer player for one side.
#[derive(Debug, Clone)]
pub struct Bot {
    color: Color,
    book: OpeningBook,
    book_plies: usize,
    searcher: Searcher,
}

impl Bot {
    /// Create a bot for `color` using its built-in repertoire.
    pub fn new(color: Color, config: SearchConfig, book_plies: usize) -> Self {
        Self {
            color,
            book: OpeningBook::for_side(color),
            book_plies,
            searcher: Searcher::new(config),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Switch sides, loading the other repertoire.
    pub fn set_color(&mut self, color: Color) {
        if color != self.color {
            self.color = color;
            self.book = OpeningBook::for_side(color);
        }
    }

    pub fn book_plies(&self) -> usize {
        self.book_plies
    }

    pub fn set_book_plies(&mut self, plies: usize) {
        self.book_plies = plies;
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.searcher.set_depth(depth);
    }

    /// Pick a move for the side to move.
    ///
    /// The book is tried while the history holds at most `book_plies` moves.
    ///
    /// Returns `None` when there is no legal move. The board is left as it
    /// was given.
    pub fn choose(&self, board: &mut Board) -> Option<Decision> {
        if board.history().len() <= self.book_plies
            && let Some(request) = self.book.lookup(board)
        {
            debug!(%request, "book move");
            return Some(Decision::Book(request));
        }

        let result = self.searcher.search(board);
        let mv = result.best_move?;
        Some(Decision::Search {
            request: MoveRequest::from(mv),
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use rookery_core::{Board, Color, MoveRequest};

    use super::{Bot, DEFAULT_BOOK_PLIES, Decision};
    use crate::search::SearchConfig;

    fn shallow() -> SearchConfig {
        SearchConfig {
            depth: 2,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn opens_from_the_book() {
        let bot = Bot::new(Color::White, shallow(), DEFAULT_BOOK_PLIES);
        let mut board = Board::starting_position();
        let decision = bot.choose(&mut board).unwrap();
        assert!(matches!(decision, Decision::Book(_)));
        assert_eq!(decision.request().to_string(), "PAWN: D2 -> D4");
    }

    fn after_e4() -> Board {
        let mut board = Board::starting_position();
        board
            .apply_move(&"PAWN E2 E4".parse::<MoveRequest>().unwrap())
            .unwrap();
        board
    }

    #[test]
    fn book_limit_is_inclusive() {
        let bot = Bot::new(Color::Black, shallow(), 1);
        let mut board = after_e4();
        let decision = bot.choose(&mut board).unwrap();
        assert_eq!(decision, Decision::Book(decision.request()));
        assert_eq!(decision.request().to_string(), "PAWN: C7 -> C6");
    }

    #[test]
    fn past_book_limit_forces_search() {
        let bot = Bot::new(Color::Black, shallow(), 0);
        let mut board = after_e4();
        let decision = bot.choose(&mut board).unwrap();
        assert!(matches!(decision, Decision::Search { .. }));
        assert!(board.is_legal(&decision.request()));
    }

    #[test]
    fn leaves_book_when_out_of_line() {
        let bot = Bot::new(Color::Black, shallow(), DEFAULT_BOOK_PLIES);
        let mut board = Board::starting_position();
        board
            .apply_move(&"PAWN A2 A4".parse::<MoveRequest>().unwrap())
            .unwrap();
        let decision = bot.choose(&mut board).unwrap();
        assert!(matches!(decision, Decision::Search { .. }));
    }

    #[test]
    fn switching_sides_swaps_repertoire() {
        let mut bot = Bot::new(Color::Black, shallow(), DEFAULT_BOOK_PLIES);
        bot.set_color(Color::White);
        assert_eq!(bot.color(), Color::White);
        let mut board = Board::starting_position();
        assert!(matches!(bot.choose(&mut board), Some(Decision::Book(_))));
    }

    #[test]
    fn no_move_when_mated() {
        let bot = Bot::new(Color::Black, shallow(), DEFAULT_BOOK_PLIES);
        let mut board: Board = "R5k1/5ppp/8/8/8/8/8/6K1 b".parse().unwrap();
        assert!(bot.choose(&mut board).is_none());
    }
}
