//! Human-versus-bot turn loop.
//!
//! Reads one command per line and writes game output to the given writer.
//! After every successful human move the bot replies if it is its turn.

use std::io::{BufRead, Write};

use rookery_core::{Board, Color, GameStatus, MoveRequest};
use rookery_engine::bot::DEFAULT_BOOK_PLIES;
use rookery_engine::search::DEFAULT_DEPTH;
use rookery_engine::{Bot, Decision, EvalWeights, SearchConfig, eval};
use tracing::{debug, info, warn};

use crate::command::{Command, Setting, parse_command};
use crate::error::PlayError;

const HELP: &str = "\
commands:
  move <PIECE> <FROM> <TO> [PROMOTION]   e.g. move PAWN E2 E4
  go                                     computer plays the side to move
  undo                                   take back the last turn
  fen <placement> [w|b]                  load a position
  new                                    start a new game
  show                                   print the board
  moves                                  list legal moves
  eval                                   print evaluation and status
  set depth 1-8 | set bot white|black | set book N
  quit";

/// Game settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side the computer plays.
    pub bot_color: Color,
    /// Search depth in plies.
    pub depth: u8,
    /// Longest history, in plies, at which the bot still plays from its book.
    pub book_plies: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot_color: Color::Black,
            depth: DEFAULT_DEPTH,
            book_plies: DEFAULT_BOOK_PLIES,
        }
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A game between a human and the bot.
pub struct Game {
    board: Board,
    bot: Bot,
    weights: EvalWeights,
}

impl Game {
    /// Start a game from the standard position.
    pub fn new(config: GameConfig) -> Self {
        let weights = EvalWeights::default();
        let search = SearchConfig {
            depth: config.depth,
            weights,
        };
        let mut board = Board::starting_position();
        eval::refresh(&mut board, &weights);
        Self {
            board,
            bot: Bot::new(config.bot_color, search, config.book_plies),
            weights,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Run the loop until `quit` or end of input.
    ///
    /// Command errors and rejected moves are reported on `out` and the loop
    /// carries on; only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), PlayError> {
        info!(bot = %self.bot.color(), "game started");
        writeln!(out, "{}", self.board.pretty())?;
        self.bot_turn(out)?;

        for line in input.lines() {
            let line = line?;
            debug!(cmd = %line.trim(), "received command");
            let flow = match parse_command(&line) {
                Ok(command) => self.execute(command, out)?,
                Err(err) => {
                    warn!(error = %err, "bad command");
                    writeln!(out, "error: {err}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        info!("game over");
        Ok(())
    }

    /// Execute one command, writing its output.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, PlayError> {
        match command {
            Command::Move(request) => self.human_move(request, out)?,
            Command::Go => {
                let side = self.board.side_to_move();
                if side != self.bot.color() {
                    info!(bot = %side, "bot switches sides");
                    self.bot.set_color(side);
                }
                self.bot_turn(out)?;
            }
            Command::Undo => self.undo(out)?,
            Command::Fen(board) => {
                self.board = *board;
                self.settle();
                writeln!(out, "{}", self.board.pretty())?;
                self.announce(out)?;
            }
            Command::New => {
                self.board = Board::starting_position();
                self.settle();
                writeln!(out, "{}", self.board.pretty())?;
                self.bot_turn(out)?;
            }
            Command::Show => {
                writeln!(out, "{}", self.board.pretty())?;
                writeln!(out, "{}", self.board)?;
                writeln!(out, "{} to move", self.board.side_to_move())?;
            }
            Command::Moves => {
                let mut requests: Vec<String> = self
                    .board
                    .legal_moves()
                    .iter()
                    .map(|mv| MoveRequest::from(mv).to_string())
                    .collect();
                requests.sort();
                for request in &requests {
                    writeln!(out, "{request}")?;
                }
                writeln!(out, "{} legal moves", requests.len())?;
            }
            Command::Eval => {
                writeln!(out, "eval {} ({})", self.board.value(), self.board.status())?;
            }
            Command::Set(setting) => self.apply_setting(setting, out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    fn human_move<W: Write>(&mut self, request: MoveRequest, out: &mut W) -> Result<(), PlayError> {
        if self.board.status().is_terminal() {
            writeln!(out, "game is over: {}", self.board.status())?;
            return Ok(());
        }
        match self.board.apply_move(&request) {
            Ok(receipt) => {
                self.settle();
                writeln!(out, "{receipt}")?;
                if !self.announce(out)? {
                    self.bot_turn(out)?;
                }
            }
            Err(err) => writeln!(out, "{}", err.receipt())?,
        }
        Ok(())
    }

    /// Let the bot move if it is its turn and the game is still on.
    fn bot_turn<W: Write>(&mut self, out: &mut W) -> Result<(), PlayError> {
        if self.board.side_to_move() != self.bot.color() || self.board.status().is_terminal() {
            return Ok(());
        }

        let Some(decision) = self.bot.choose(&mut self.board) else {
            return Ok(());
        };
        let request = decision.request();
        match self.board.apply_move(&request) {
            Ok(receipt) => {
                self.settle();
                match decision {
                    Decision::Book(_) => info!(%receipt, "bot played book move"),
                    Decision::Search { result, .. } => {
                        info!(%receipt, score = result.score, nodes = result.nodes, "bot searched")
                    }
                }
                writeln!(out, "{} plays {receipt}", self.bot.color())?;
                self.announce(out)?;
            }
            Err(err) => {
                warn!(error = %err, "bot chose an illegal move");
                writeln!(out, "{}", err.receipt())?;
            }
        }
        Ok(())
    }

    /// Take back the last turn: the bot's reply and the human move before it.
    fn undo<W: Write>(&mut self, out: &mut W) -> Result<(), PlayError> {
        let Some(mv) = self.board.undo_move() else {
            writeln!(out, "nothing to undo")?;
            return Ok(());
        };
        writeln!(out, "took back {mv}")?;
        if self.board.side_to_move() == self.bot.color()
            && let Some(mv) = self.board.undo_move()
        {
            writeln!(out, "took back {mv}")?;
        }
        self.settle();
        Ok(())
    }

    fn apply_setting<W: Write>(&mut self, setting: Setting, out: &mut W) -> Result<(), PlayError> {
        match setting {
            Setting::Depth(depth) => {
                self.bot.set_depth(depth);
                writeln!(out, "depth set to {}", self.bot.searcher().config().depth)?;
            }
            Setting::Bot(color) => {
                self.bot.set_color(color);
                writeln!(out, "bot plays {color}")?;
                self.bot_turn(out)?;
            }
            Setting::BookPlies(plies) => {
                self.bot.set_book_plies(plies);
                writeln!(out, "book used up to ply {plies}")?;
            }
        }
        Ok(())
    }

    /// Recompute and record status and evaluation after the board changed.
    fn settle(&mut self) {
        eval::refresh(&mut self.board, &self.weights);
    }

    /// Print the result if the game has ended. Returns `true` if it has.
    fn announce<W: Write>(&self, out: &mut W) -> Result<bool, PlayError> {
        let status = self.board.status();
        match status {
            GameStatus::Ongoing => return Ok(false),
            GameStatus::Checkmate { loser } => {
                writeln!(out, "{status}")?;
                writeln!(out, "{} wins", loser.flip())?;
            }
            GameStatus::Stalemate | GameStatus::Draw(_) => writeln!(out, "{status}")?,
        }
        info!(%status, "game ended");
        Ok(true)
    }
}
