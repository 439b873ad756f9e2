//! Move execution and exact undo.
//!
//! Every change follows the same order: mutate the board, refresh guards,
//! pins, and checkers for both colors, and only then (for requests applied
//! through [`Board::apply_move`]) classify the resulting position.

use tracing::{debug, trace};

use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::error::MoveError;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::receipt::Receipt;
use crate::request::MoveRequest;
use crate::square::Square;
use crate::status::GameStatus;

/// What a move changed beyond the mover's own relocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UndoRecord {
    captured: Option<PieceId>,
    castled_rook: Option<PieceId>,
    promoted: Option<PieceId>,
    fingerprint: String,
    receipt_logged: bool,
}

impl Board {
    fn relocate(&mut self, id: PieceId, from: Square, to: Square) {
        self.cells[from.index()] = None;
        self.cells[to.index()] = Some(id);
        self.pieces[id.index()].square = to;
    }

    /// Resolve a request against the legal moves of the current position.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] naming why the request cannot be played.
    pub fn find_move(&self, request: &MoveRequest) -> Result<Move, MoveError> {
        let Some(piece) = self.piece_at(request.from) else {
            return Err(MoveError::EmptySquare { request: *request });
        };
        if piece.kind() != request.piece {
            return Err(MoveError::WrongPiece {
                request: *request,
                found: piece.kind(),
            });
        }
        if piece.color() != self.side_to_move {
            return Err(MoveError::WrongTurn {
                request: *request,
                to_move: self.side_to_move,
            });
        }
        if let Some(kind) = request.promotion
            && !kind.is_promotion_target()
        {
            return Err(MoveError::InvalidPromotion { request: *request });
        }

        let wanted = request.promotion.unwrap_or(PieceKind::Queen);
        for mv in &self.legal_moves() {
            if mv.from() != request.from || mv.to() != request.to {
                continue;
            }
            match mv.promotion() {
                None if request.promotion.is_some() => {
                    return Err(MoveError::InvalidPromotion { request: *request });
                }
                None => return Ok(*mv),
                Some(kind) if kind == wanted => return Ok(*mv),
                Some(_) => {}
            }
        }
        Err(MoveError::Illegal { request: *request })
    }

    /// Return `true` if the request names a legal move for the side to move.
    pub fn is_legal(&self, request: &MoveRequest) -> bool {
        self.find_move(request).is_ok()
    }

    /// Validate and play a requested move, then classify the new position.
    ///
    /// All or nothing: on error the board is untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when the request is not a legal move; its
    /// [`receipt`](MoveError::receipt) is the rejection text for a UI.
    pub fn apply_move(&mut self, request: &MoveRequest) -> Result<Receipt, MoveError> {
        let mv = self.find_move(request).inspect_err(|err| {
            debug!(%request, %err, "rejected move");
        })?;

        let receipt = self.receipt_for(&mv);
        self.make_move(mv);
        self.receipts.push(receipt.to_string());
        if let Some(record) = self.undo_stack.last_mut() {
            record.receipt_logged = true;
        }
        self.status = self.detect_status();
        debug!(%receipt, status = %self.status, "applied move");
        Ok(receipt)
    }

    fn receipt_for(&self, mv: &Move) -> Receipt {
        let (piece, from, to, promotion) = (mv.piece_kind(), mv.from(), mv.to(), mv.promotion());
        match mv.kind() {
            MoveKind::Quiet => Receipt::Moved {
                piece,
                from,
                to,
                promotion,
            },
            MoveKind::Capture => Receipt::Captured {
                piece,
                captured: self
                    .piece_at(to)
                    .map(Piece::kind)
                    .expect("capture target is occupied"),
                from,
                to,
                promotion,
            },
            MoveKind::EnPassant => Receipt::EnPassant { from, to },
            MoveKind::Castle => Receipt::Castled(
                mv.castle_side()
                    .expect("castle moves land on a castling square"),
            ),
        }
    }

    /// Play a move produced by the generator for this position.
    ///
    /// Skips validation and status detection; search uses this with
    /// [`Board::undo_move`] to walk the tree in place.
    pub fn make_move(&mut self, mv: Move) {
        let us = mv.side();
        let them = us.flip();
        debug_assert_eq!(us, self.side_to_move, "move for the wrong side");

        let mut record = UndoRecord {
            captured: None,
            castled_rook: None,
            promoted: None,
            fingerprint: String::new(),
            receipt_logged: false,
        };

        if let Some(victim_sq) = mv.captured_square() {
            let victim = self.cells[victim_sq.index()]
                .take()
                .expect("captured square is occupied");
            debug_assert_ne!(victim, self.kings[them.index()], "kings are never captured");
            self.live[them.index()].remove(&victim);
            self.captures.push(victim);
            record.captured = Some(victim);
        }

        self.relocate(mv.piece(), mv.from(), mv.to());
        self.pieces[mv.piece().index()].move_count += 1;

        if let Some(side) = mv.castle_side() {
            let rook = self.cells[side.rook_from(us).index()].expect("castling rook is in its corner");
            self.relocate(rook, side.rook_from(us), side.rook_to(us));
            self.pieces[rook.index()].move_count += 1;
            record.castled_rook = Some(rook);
        }

        if let Some(kind) = mv.promotion() {
            let pawn = mv.piece();
            let move_count = self.pieces[pawn.index()].move_count;
            let promoted = PieceId(self.pieces.len() as u16);
            self.pieces.push(Piece::new(kind, us, mv.to(), move_count));
            self.live[us.index()].remove(&pawn);
            self.live[us.index()].insert(promoted);
            self.cells[mv.to().index()] = Some(promoted);
            record.promoted = Some(promoted);
        }

        self.side_to_move = them;
        self.history.push(mv);
        self.refresh();

        let fingerprint = self.fingerprint();
        *self.repetitions.entry(fingerprint.clone()).or_insert(0) += 1;
        record.fingerprint = fingerprint;
        self.undo_stack.push(record);

        trace!(%mv, ply = self.history.len(), "make");
    }

    /// Take back the last move, restoring the exact prior state.
    ///
    /// Clears the terminal status; it is recomputed on the next evaluation.
    /// Returns `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        let record = self
            .undo_stack
            .pop()
            .expect("every played move has an undo record");
        let us = mv.side();
        let them = us.flip();

        if let Some(count) = self.repetitions.get_mut(&record.fingerprint) {
            *count -= 1;
            if *count == 0 {
                self.repetitions.remove(&record.fingerprint);
            }
        }
        if record.receipt_logged {
            self.receipts.pop();
        }

        if let Some(promoted) = record.promoted {
            assert_eq!(
                promoted.index(),
                self.pieces.len() - 1,
                "promoted piece is the newest in the arena"
            );
            self.pieces.pop();
            self.live[us.index()].remove(&promoted);
            self.live[us.index()].insert(mv.piece());
            self.cells[mv.to().index()] = Some(mv.piece());
        }

        if let Some(rook) = record.castled_rook {
            let side = mv
                .castle_side()
                .expect("castled rook implies a castle move");
            self.relocate(rook, side.rook_to(us), side.rook_from(us));
            self.pieces[rook.index()].move_count -= 1;
        }

        self.relocate(mv.piece(), mv.to(), mv.from());
        self.pieces[mv.piece().index()].move_count -= 1;

        if let Some(victim) = record.captured {
            let sq = self.pieces[victim.index()].square;
            self.cells[sq.index()] = Some(victim);
            self.live[them.index()].insert(victim);
            self.captures.pop();
        }

        self.side_to_move = us;
        self.status = GameStatus::Ongoing;
        self.refresh();

        trace!(%mv, ply = self.history.len(), "undo");
        Some(mv)
    }
}
