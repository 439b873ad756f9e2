//! Position fingerprints: FEN piece placement with an optional side to move.
//!
//! The fingerprint of a board is the placement field alone, rank 8 first,
//! empty runs compressed to a digit. It keys repetition counting and the
//! opening book, and it round-trips exactly through `str::parse::<Board>`.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Placement of the standard starting position.
pub const STARTING_FINGERPRINT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Encode the piece placement, e.g. `"rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"`.
    pub fn fingerprint(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0u8..8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0u8;
            for col in 0u8..8 {
                let piece = Square::new(row, col).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
        }
        out
    }
}

/// Parse a placement, optionally followed by `w` or `b`.
///
/// Further FEN fields (castling, en passant, clocks) are accepted and
/// ignored; castling and en passant eligibility come from move counts and
/// history instead.
impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let placement = fields.next().ok_or(FenError::Empty)?;
        let side_to_move = match fields.next() {
            None => Color::White,
            Some(token) => match token {
                "w" => Color::White,
                "b" => Color::Black,
                _ => {
                    return Err(FenError::InvalidColor {
                        found: token.to_string(),
                    });
                }
            },
        };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut placements = Vec::with_capacity(32);
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            let mut last_was_digit = false;
            for c in rank.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    if last_was_digit {
                        return Err(FenError::ConsecutiveDigits { rank_index: row });
                    }
                    col += run as usize;
                    last_was_digit = true;
                    continue;
                }
                last_was_digit = false;

                let kind = PieceKind::from_fen_char(c)
                    .ok_or(FenError::InvalidPieceChar { character: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if let Some(sq) = Square::new(row as u8, col as u8) {
                    placements.push((sq, kind, color));
                }
                col += 1;
            }
            if col != 8 {
                return Err(FenError::BadRankLength {
                    rank_index: row,
                    length: col,
                });
            }
        }

        Ok(Board::from_pieces(placements, side_to_move)?)
    }
}

/// Prints the fingerprint followed by the side to move, e.g. `"... w"`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fingerprint(), self.side_to_move().fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FINGERPRINT;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::{BoardError, FenError};

    #[test]
    fn starting_roundtrip() {
        let board: Board = STARTING_FINGERPRINT.parse().unwrap();
        assert_eq!(board.fingerprint(), STARTING_FINGERPRINT);
        assert_eq!(board.to_string(), format!("{STARTING_FINGERPRINT} w"));
    }

    #[test]
    fn kiwipete_roundtrip() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
        let board: Board = fen.parse().unwrap();
        assert_eq!(board.fingerprint(), fen);
    }

    #[test]
    fn side_to_move_and_extra_fields() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 b KQkq - 0 1".parse().unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.fingerprint(), "4k3/8/8/8/8/8/8/4K3");
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<Board>(), Err(FenError::Empty));
        assert_eq!(
            "8/8/8".parse::<Board>(),
            Err(FenError::WrongRankCount { found: 3 })
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K2".parse::<Board>(),
            Err(FenError::BadRankLength {
                rank_index: 7,
                length: 7
            })
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K4".parse::<Board>(),
            Err(FenError::BadRankLength {
                rank_index: 7,
                length: 9
            })
        );
        assert_eq!(
            "4k3/8/8/44/8/8/8/4K3".parse::<Board>(),
            Err(FenError::ConsecutiveDigits { rank_index: 3 })
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4X3".parse::<Board>(),
            Err(FenError::InvalidPieceChar { character: 'X' })
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 x".parse::<Board>(),
            Err(FenError::InvalidColor {
                found: "x".to_string()
            })
        );
        assert_eq!(
            "4k3/8/8/8/8/8/4R3/4K3 w".parse::<Board>(),
            Err(FenError::InvalidBoard {
                source: BoardError::OpponentInCheck {
                    color: Color::Black
                }
            })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/4K3".parse::<Board>(),
            Err(FenError::InvalidBoard {
                source: BoardError::InvalidKingCount {
                    color: Color::Black,
                    count: 0
                }
            })
        );
    }
}
