//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// A move in the frame of the side to move.
///
/// Castling is a two-square king move; the rook follows when the move is
/// applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// The same move seen from the opponent's frame
    #[inline]
    #[must_use]
    pub const fn rotate(self) -> Self {
        Move {
            from: self.from.rotate(),
            to: self.to.rotate(),
            promotion: self.promotion,
        }
    }

    /// Absolute coordinate notation (`e2e4`, `e7e8q`) for a move made by `side`
    #[must_use]
    pub fn to_uci(self, side: Color) -> String {
        let mut text = format!("{}{}", self.from.to_algebraic(side), self.to.to_algebraic(side));
        if let Some(promo) = self.promotion {
            text.push(promo.to_char());
        }
        text
    }
}

/// Frame-relative coordinates, correct as-is only when white is to move.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
