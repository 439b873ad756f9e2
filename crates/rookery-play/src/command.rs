//! Command parsing.

use rookery_core::{Board, Color, MoveRequest};

use crate::error::PlayError;

/// Deepest search `set depth` accepts.
pub const MAX_DEPTH: u8 = 8;

/// A runtime setting changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// `set depth N` -- search depth in plies, from 1 to [`MAX_DEPTH`].
    Depth(u8),
    /// `set bot white|black` -- the side the computer plays.
    Bot(Color),
    /// `set book N` -- consult the opening book while the game is at most N plies old.
    BookPlies(usize),
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `move <PIECE> <FROM> <TO> [PROMOTION]` -- play a move.
    Move(MoveRequest),
    /// `go` -- the computer plays the side to move.
    Go,
    /// `undo` -- take back the last turn.
    Undo,
    /// `fen <placement> [w|b]` -- load a position.
    Fen(Box<Board>),
    /// `new` -- start a new game.
    New,
    /// `show` -- print the board.
    Show,
    /// `moves` -- list the legal moves.
    Moves,
    /// `eval` -- print the static evaluation and game status.
    Eval,
    /// `set ...` -- change a setting.
    Set(Setting),
    /// `help` -- list the commands.
    Help,
    /// `quit` -- leave the game.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };

    match head.to_ascii_lowercase().as_str() {
        "move" | "m" => parse_move(args),
        "go" => Ok(Command::Go),
        "undo" => Ok(Command::Undo),
        "fen" => parse_fen(args),
        "new" => Ok(Command::New),
        "show" | "board" => Ok(Command::Show),
        "moves" => Ok(Command::Moves),
        "eval" => Ok(Command::Eval),
        "set" => parse_set(args),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(PlayError::UnknownCommand {
            command: head.to_string(),
        }),
    }
}

fn parse_move(args: &[&str]) -> Result<Command, PlayError> {
    if args.is_empty() {
        return Err(PlayError::MissingArgument { command: "move" });
    }
    let request: MoveRequest = args.join(" ").parse()?;
    Ok(Command::Move(request))
}

fn parse_fen(args: &[&str]) -> Result<Command, PlayError> {
    if args.is_empty() {
        return Err(PlayError::MissingArgument { command: "fen" });
    }
    let board: Board = args.join(" ").parse()?;
    Ok(Command::Fen(Box::new(board)))
}

fn parse_set(args: &[&str]) -> Result<Command, PlayError> {
    let (Some(&name), Some(&value)) = (args.first(), args.get(1)) else {
        return Err(PlayError::MissingArgument { command: "set" });
    };

    let invalid = || PlayError::InvalidArgument {
        command: "set",
        value: format!("{name} {value}"),
    };

    let setting = match name.to_ascii_lowercase().as_str() {
        "depth" => {
            let depth: u8 = value.parse().map_err(|_| invalid())?;
            if !(1..=MAX_DEPTH).contains(&depth) {
                return Err(invalid());
            }
            Setting::Depth(depth)
        }
        "bot" => Setting::Bot(Color::from_token(value).ok_or_else(invalid)?),
        "book" => Setting::BookPlies(value.parse().map_err(|_| invalid())?),
        _ => return Err(invalid()),
    };
    Ok(Command::Set(setting))
}
