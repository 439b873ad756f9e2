//! Attacked squares, checkers, and absolute pins.
//!
//! Attack maps are rebuilt from scratch after every change to the board. A
//! pawn attacks only its two forward diagonals, and a king its eight
//! neighbours regardless of whether it could legally step there, so
//! computing one side's map never depends on the other side's.

pub(crate) mod tables;

use crate::board::Board;
use crate::color::Color;
use crate::piece::{PieceId, Pin};
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::tables::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL, Ray};

pub use self::tables::{between, direction};

/// Every square one side attacks, and the pins its sliders create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackMap {
    attackers: [Vec<PieceId>; 64],
    pins: Vec<(PieceId, Pin)>,
}

impl AttackMap {
    fn new() -> AttackMap {
        AttackMap {
            attackers: std::array::from_fn(|_| Vec::new()),
            pins: Vec::new(),
        }
    }

    fn add(&mut self, sq: Square, attacker: PieceId) {
        self.attackers[sq.index()].push(attacker);
    }

    /// Pieces attacking `sq`.
    pub fn attackers(&self, sq: Square) -> &[PieceId] {
        &self.attackers[sq.index()]
    }

    /// Return `true` if at least one piece attacks `sq`.
    pub fn is_attacked(&self, sq: Square) -> bool {
        !self.attackers[sq.index()].is_empty()
    }

    /// Enemy pieces pinned by this side, with their pins.
    pub fn pins(&self) -> &[(PieceId, Pin)] {
        &self.pins
    }

    pub(crate) fn into_parts(self) -> ([Vec<PieceId>; 64], Vec<(PieceId, Pin)>) {
        (self.attackers, self.pins)
    }
}

/// Ray directions for a sliding piece kind; empty for everything else.
pub fn slider_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Queen => &KING_OFFSETS,
        _ => &[],
    }
}

/// Compute every square attacked by `color`, with the attacking pieces.
///
/// Sliders also record pins: when a ray passes through exactly one enemy
/// piece and then reaches the enemy king, that piece is pinned. A ray that
/// reaches the enemy king keeps going, so the squares behind the king count
/// as attacked and the king cannot step back along the line.
pub fn compute_attacked_squares(board: &Board, color: Color) -> AttackMap {
    let mut map = AttackMap::new();

    for id in board.piece_ids(color) {
        let piece = board.piece(id);
        let from = piece.square();
        match piece.kind() {
            PieceKind::Pawn => {
                let dir = color.pawn_direction();
                for d_col in [-1, 1] {
                    if let Some(sq) = from.offset(dir, d_col) {
                        map.add(sq, id);
                    }
                }
            }
            PieceKind::Knight => leaper_attacks(&mut map, id, from, &KNIGHT_OFFSETS),
            PieceKind::King => leaper_attacks(&mut map, id, from, &KING_OFFSETS),
            kind => {
                for &step in slider_directions(kind) {
                    cast_ray(board, &mut map, id, color, from, step);
                }
            }
        }
    }

    map
}

fn leaper_attacks(map: &mut AttackMap, id: PieceId, from: Square, offsets: &[(i8, i8)]) {
    for &(d_row, d_col) in offsets {
        if let Some(sq) = from.offset(d_row, d_col) {
            map.add(sq, id);
        }
    }
}

fn cast_ray(board: &Board, map: &mut AttackMap, id: PieceId, color: Color, from: Square, step: (i8, i8)) {
    let mut ray = Ray::new(from, step);
    let mut path = SquareSet::from_square(from);

    while let Some(sq) = ray.next() {
        map.add(sq, id);
        let Some(blocker) = board.piece_at(sq) else {
            path.insert(sq);
            continue;
        };
        if blocker.color() == color {
            return;
        }

        if blocker.kind() == PieceKind::King {
            for beyond in ray.by_ref() {
                map.add(beyond, id);
                if board.occupant(beyond).is_some() {
                    break;
                }
            }
            return;
        }

        // One enemy piece on the ray: pinned if the enemy king is next.
        let pinned = board.occupant(sq);
        for beyond in ray.by_ref() {
            match board.piece_at(beyond) {
                None => path.insert(beyond),
                Some(piece) => {
                    if piece.kind() == PieceKind::King
                        && piece.color() != color
                        && let Some(pinned) = pinned
                    {
                        map.pins.push((pinned, Pin { pinner: id, path }));
                    }
                    break;
                }
            }
        }
        return;
    }
}

/// Return `true` if a slider of `by` would attack `target` once the squares
/// in `vacated` are emptied and `filled` is occupied.
///
/// Used for en passant, where two pieces leave one row at once.
pub(crate) fn slider_attacks_after(
    board: &Board,
    target: Square,
    by: Color,
    vacated: &[Square],
    filled: Square,
) -> bool {
    for &step in &KING_OFFSETS {
        let diagonal = step.0 != 0 && step.1 != 0;
        for sq in Ray::new(target, step) {
            if sq == filled {
                break;
            }
            if vacated.contains(&sq) {
                continue;
            }
            let Some(piece) = board.piece_at(sq) else {
                continue;
            };
            if piece.color() == by {
                let reaches = match piece.kind() {
                    PieceKind::Queen => true,
                    PieceKind::Bishop => diagonal,
                    PieceKind::Rook => !diagonal,
                    _ => false,
                };
                if reaches {
                    return true;
                }
            }
            break;
        }
    }
    false
}
