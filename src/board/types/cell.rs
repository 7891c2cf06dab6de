//! Board cell contents.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;

/// Contents of one cell of the padded board.
///
/// Ownership is relative: `Friendly` pieces belong to the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    /// Sentinel border cell
    OffBoard,
    #[default]
    Empty,
    Friendly(Piece),
    Enemy(Piece),
}

impl Cell {
    /// Swap ownership, as seen by the other side
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Cell {
        match self {
            Cell::Friendly(p) => Cell::Enemy(p),
            Cell::Enemy(p) => Cell::Friendly(p),
            other => other,
        }
    }

    #[inline]
    #[must_use]
    pub const fn friendly(self) -> Option<Piece> {
        match self {
            Cell::Friendly(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn enemy(self) -> Option<Piece> {
        match self {
            Cell::Enemy(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character used in the 120-cell board string
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::OffBoard => ' ',
            Cell::Empty => '.',
            Cell::Friendly(p) => p.to_char().to_ascii_uppercase(),
            Cell::Enemy(p) => p.to_char(),
        }
    }

    /// Inverse of [`Cell::to_char`]
    #[must_use]
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' => Some(Cell::OffBoard),
            '.' => Some(Cell::Empty),
            _ => {
                let piece = Piece::from_char(c)?;
                Some(if c.is_ascii_uppercase() {
                    Cell::Friendly(piece)
                } else {
                    Cell::Enemy(piece)
                })
            }
        }
    }
}
