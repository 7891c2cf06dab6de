use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::position::Position;
use super::types::{CastlingRights, Cell, Color, Move, Piece, Square};

/// Standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The move counters are accepted but not tracked. With black to move
    /// the board comes back rotated, like any position reached by a white
    /// move.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields { found: parts.len() });
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::SideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castling = CastlingRights::from_fen(parts[2]).ok_or_else(|| FenError::Castling {
            found: parts[2].to_string(),
        })?;

        let mut position = Position::empty(Color::White, castling);

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }
        for (row, text) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::UnknownPiece {
                    rank: rank + 1,
                    letter: c,
                })?;
                let sq = Square::from_coords(rank, file, Color::White).map_err(|_| FenError::RankWidth {
                    rank: rank + 1,
                    width: file + 1,
                })?;
                position.board[sq.index()] = if c.is_ascii_uppercase() {
                    Cell::Friendly(piece)
                } else {
                    Cell::Enemy(piece)
                };
                file += 1;
            }
            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: rank + 1,
                    width: file,
                });
            }
        }

        position.en_passant = match parts[3] {
            "-" => None,
            text => Some(Square::from_algebraic(text, Color::White).map_err(|_| {
                FenError::EnPassant {
                    found: text.to_string(),
                }
            })?),
        };
        position.drop_unbacked_castling();

        let position = match side {
            Color::White => position,
            Color::Black => position.rotate(false),
        };
        Ok(position.with_static_value())
    }

    /// Clear every castling right whose king is not on the e-file of its
    /// home rank or whose rook is not in the matching corner. Only valid
    /// while the board is in white's frame.
    fn drop_unbacked_castling(&mut self) {
        for color in Color::BOTH {
            let home = match color {
                Color::White => 0,
                Color::Black => 7,
            };
            let king_home = self.piece_at(home, 4) == Some((color, Piece::King));
            for (kingside, rook_file) in [(true, 7), (false, 0)] {
                if !king_home || self.piece_at(home, rook_file) != Some((color, Piece::Rook)) {
                    self.castling.remove(color, kingside);
                }
            }
        }
    }

    /// Convert the position to FEN notation. Counters are always `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(rank, file) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    let c = piece.to_char();
                    row.push(if color == Color::White {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    });
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_algebraic(self.side));

        format!(
            "{} {} {} {} 0 1",
            rows.join("/"),
            self.side.to_fen_char(),
            self.castling,
            ep
        )
    }

    /// Parse a move in absolute coordinate notation (e.g. "e2e4", "e7e8q").
    ///
    /// Returns the matching generated move. A promotion without a piece
    /// letter promotes to a queen.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        if text.len() < 4 || text.len() > 5 || !text.is_ascii() {
            return Err(MoveParseError::Length { text: text.to_string() });
        }

        let square = |name: &str| {
            Square::from_algebraic(name, self.side).map_err(|source| MoveParseError::Square {
                text: text.to_string(),
                source,
            })
        };
        let from = square(&text[0..2])?;
        let to = square(&text[2..4])?;

        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                _ => {
                    return Err(MoveParseError::Promotion {
                        text: text.to_string(),
                        letter: c,
                    })
                }
            },
        };

        self.moves()
            .find(|mv| {
                mv.from() == from
                    && mv.to() == to
                    && match promotion {
                        Some(piece) => mv.promotion() == Some(piece),
                        None => mv.promotion().is_none_or(|p| p == Piece::Queen),
                    }
            })
            .ok_or_else(|| MoveParseError::NotGenerated {
                text: text.to_string(),
                side: self.side,
            })
    }

    /// Parse a coordinate move and apply it in one call.
    pub fn apply_uci(&self, text: &str) -> Result<Position, MoveParseError> {
        let mv = self.parse_move(text)?;
        Ok(self.apply(mv))
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
