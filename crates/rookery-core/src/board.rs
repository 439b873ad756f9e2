//! The chess board: square occupancy, the piece arena, guards, and history.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::attacks::compute_attacked_squares;
use crate::castle::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::BoardError;
use crate::fen::STARTING_FINGERPRINT;
use crate::make_move::UndoRecord;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::status::GameStatus;

/// Complete game state.
///
/// Pieces live in an arena indexed by [`PieceId`]; squares refer to pieces by
/// id and every piece records its own square. Captured pieces stay in the
/// arena (outside both live sets) so undo can restore them.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index()`].
    pub(crate) cells: [Option<PieceId>; 64],
    /// Attackers of each square, per color.
    pub(crate) guards: [[Vec<PieceId>; 64]; Color::COUNT],
    /// Every piece ever placed on this board.
    pub(crate) pieces: Vec<Piece>,
    /// Pieces still on the board, per color.
    pub(crate) live: [BTreeSet<PieceId>; Color::COUNT],
    pub(crate) kings: [PieceId; Color::COUNT],
    pub(crate) side_to_move: Color,
    pub(crate) history: Vec<Move>,
    pub(crate) undo_stack: Vec<UndoRecord>,
    /// Captured pieces, most recent last.
    pub(crate) captures: Vec<PieceId>,
    pub(crate) receipts: Vec<String>,
    /// How often each placement has occurred in this game.
    pub(crate) repetitions: HashMap<String, u32>,
    /// Pieces giving check to each color's king.
    pub(crate) checkers: [Vec<PieceId>; Color::COUNT],
    pub(crate) status: GameStatus,
    pub(crate) value: i32,
}

impl Board {
    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        STARTING_FINGERPRINT
            .parse()
            .expect("starting fingerprint is valid")
    }

    /// Build a board from piece placements.
    ///
    /// Move counts are inferred from placement: a pawn off its home row, a
    /// king off its home square, and a rook off its corner count as having
    /// moved once. Later placements on the same square replace earlier ones.
    pub fn from_pieces<I>(placements: I, side_to_move: Color) -> Result<Board, BoardError>
    where
        I: IntoIterator<Item = (Square, PieceKind, Color)>,
    {
        let mut grid: [Option<(PieceKind, Color)>; 64] = [None; 64];
        for (sq, kind, color) in placements {
            grid[sq.index()] = Some((kind, color));
        }

        let mut pieces = Vec::new();
        let mut cells = [None; 64];
        let mut live: [BTreeSet<PieceId>; Color::COUNT] = [BTreeSet::new(), BTreeSet::new()];
        let mut kings: [Vec<PieceId>; Color::COUNT] = [Vec::new(), Vec::new()];

        for sq in Square::all() {
            let Some((kind, color)) = grid[sq.index()] else {
                continue;
            };
            if kind == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7) {
                return Err(BoardError::PawnOnBackRank);
            }
            let id = PieceId(pieces.len() as u16);
            pieces.push(Piece::new(kind, color, sq, inferred_move_count(kind, color, sq)));
            cells[sq.index()] = Some(id);
            live[color.index()].insert(id);
            if kind == PieceKind::King {
                kings[color.index()].push(id);
            }
        }

        for color in Color::ALL {
            let count = kings[color.index()].len();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let mut board = Board {
            cells,
            guards: [
                std::array::from_fn(|_| Vec::new()),
                std::array::from_fn(|_| Vec::new()),
            ],
            pieces,
            live,
            kings: [kings[0][0], kings[1][0]],
            side_to_move,
            history: Vec::new(),
            undo_stack: Vec::new(),
            captures: Vec::new(),
            receipts: Vec::new(),
            repetitions: HashMap::new(),
            checkers: [Vec::new(), Vec::new()],
            status: GameStatus::Ongoing,
            value: 0,
        };
        board.refresh();
        board.check_waiting_king()?;
        board.repetitions.insert(board.fingerprint(), 1);
        Ok(board)
    }

    /// Return the same position with a different side to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OpponentInCheck`] if the side left waiting
    /// would be in check.
    pub fn with_side_to_move(mut self, color: Color) -> Result<Board, BoardError> {
        self.side_to_move = color;
        self.check_waiting_king()?;
        Ok(self)
    }

    /// The side not to move must not be in check.
    fn check_waiting_king(&self) -> Result<(), BoardError> {
        let waiting = self.side_to_move.flip();
        if self.is_in_check(waiting) {
            return Err(BoardError::OpponentInCheck { color: waiting });
        }
        Ok(())
    }

    /// Recompute guards, pins, and checkers for both colors.
    pub(crate) fn refresh(&mut self) {
        for piece in &mut self.pieces {
            piece.pin = None;
        }

        for color in Color::ALL {
            let (attackers, pins) = compute_attacked_squares(self, color).into_parts();
            self.guards[color.index()] = attackers;
            for (pinned, pin) in pins {
                self.pieces[pinned.index()].pin = Some(pin);
            }
        }

        for color in Color::ALL {
            let king_sq = self.king_square(color);
            self.checkers[color.index()] = self.guards[color.flip().index()][king_sq.index()].clone();
        }
    }

    /// Which side moves next.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Look up a piece by id. Captured pieces remain addressable.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Id of the piece on `sq`, if any.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<PieceId> {
        self.cells[sq.index()]
    }

    /// The piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.occupant(sq).map(|id| self.piece(id))
    }

    /// Ids of `color`'s pieces still on the board, in creation order.
    pub fn piece_ids(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.live[color.index()].iter().copied()
    }

    /// `color`'s pieces still on the board.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.piece_ids(color).map(|id| self.piece(id))
    }

    /// Return `true` if the piece is still on the board.
    pub fn is_live(&self, id: PieceId) -> bool {
        let color = self.piece(id).color();
        self.live[color.index()].contains(&id)
    }

    #[inline]
    pub fn king(&self, color: Color) -> PieceId {
        self.kings[color.index()]
    }

    /// Return the square of the given side's king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.piece(self.king(color)).square()
    }

    /// Pieces of `by` attacking `sq`.
    #[inline]
    pub fn guards(&self, sq: Square, by: Color) -> &[PieceId] {
        &self.guards[by.index()][sq.index()]
    }

    #[inline]
    pub fn is_attacked_by(&self, sq: Square, by: Color) -> bool {
        !self.guards(sq, by).is_empty()
    }

    /// Enemy pieces currently attacking `color`'s king. Two or more is double check.
    #[inline]
    pub fn checkers(&self, color: Color) -> &[PieceId] {
        &self.checkers[color.index()]
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        !self.checkers(color).is_empty()
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Captured pieces, most recent last.
    #[inline]
    pub fn captured(&self) -> &[PieceId] {
        &self.captures
    }

    /// Receipts of the requests applied through [`Board::apply_move`].
    #[inline]
    pub fn receipts(&self) -> &[String] {
        &self.receipts
    }

    /// How often the placement `fingerprint` has occurred.
    pub fn repetition_count(&self, fingerprint: &str) -> u32 {
        self.repetitions.get(fingerprint).copied().unwrap_or(0)
    }

    /// Terminal state as of the last detection.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Stored evaluation, in centipawns from White's point of view.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Store an externally computed status and evaluation.
    pub fn record_evaluation(&mut self, status: GameStatus, value: i32) {
        self.status = status;
        self.value = value;
    }

    /// Return `true` if `color` has castled in this game.
    pub fn has_castled(&self, color: Color) -> bool {
        self.history
            .iter()
            .any(|mv| mv.side() == color && mv.kind() == MoveKind::Castle)
    }

    /// Sum of `color`'s unsigned piece values, kings excluded.
    pub fn material(&self, color: Color) -> i32 {
        self.pieces(color)
            .filter(|p| p.kind() != PieceKind::King)
            .map(|p| p.kind().value())
            .sum()
    }

    /// Return a displayable wrapper that prints the board as an 8x8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

fn inferred_move_count(kind: PieceKind, color: Color, sq: Square) -> u16 {
    let home = match kind {
        PieceKind::Pawn => sq.row() == color.pawn_row(),
        PieceKind::King => sq == CastleSide::king_from(color),
        PieceKind::Rook => CastleSide::ALL
            .into_iter()
            .any(|side| side.rook_from(color) == sq),
        _ => true,
    };
    if home { 0 } else { 1 }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board(\"{} {}\", plies: {}, {:?})",
            self.fingerprint(),
            self.side_to_move.fen_char(),
            self.history.len(),
            self.status
        )
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = Square::new(row, col)
                    .and_then(|sq| board.piece_at(sq))
                    .map_or('.', |piece| piece.fen_char());
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
