//! Square types and utilities.
//!
//! Squares index a 10x12 padded board. The playable 8x8 area sits inside a
//! sentinel border two rows deep at the top and bottom and one column wide
//! on each side, so a knight jump from any playable square lands inside the
//! array and is stopped by a sentinel cell instead of a bounds check.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use crate::board::error::SquareError;

/// Number of cells on the padded board
pub const BOARD_CELLS: usize = 120;

/// One rank toward the opponent
pub(crate) const N: isize = -10;
/// One file toward the h-file (in white's frame)
pub(crate) const E: isize = 1;
/// One rank toward the active side
pub(crate) const S: isize = 10;
/// One file toward the a-file (in white's frame)
pub(crate) const W: isize = -1;

/// A cell index on the padded board, relative to the active side's frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A8: Square = Square(21);
    pub const H8: Square = Square(28);
    pub const A1: Square = Square(91);
    pub const H1: Square = Square(98);

    /// Create a square from a padded index (0-119)
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < BOARD_CELLS {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Padded index (0-119)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The same cell seen from the other side after a board rotation
    #[inline]
    #[must_use]
    pub const fn rotate(self) -> Self {
        Square(119 - self.0)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, delta: isize) -> Self {
        Square((self.0 as isize + delta) as u8)
    }

    /// Square halfway between two squares on the same rank
    #[inline]
    #[must_use]
    pub(crate) const fn midpoint(a: Square, b: Square) -> Self {
        Square((a.0 + b.0) / 2)
    }

    /// Row on the 8x8 board counted from the active side (0 = first rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        9 - self.0 as usize / 10
    }

    /// Column on the 8x8 board (0 = leftmost for the active side)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0 as usize % 10 - 1
    }

    /// Returns true if the square lies inside the playable 8x8 area
    #[inline]
    #[must_use]
    pub const fn is_playable(self) -> bool {
        let row = self.0 / 10;
        let col = self.0 % 10;
        row >= 2 && row <= 9 && col >= 1 && col <= 8
    }

    /// Returns true if the square is on the active side's promotion rank
    #[inline]
    #[must_use]
    pub const fn is_back_rank(self) -> bool {
        self.0 >= Square::A8.0 && self.0 <= Square::H8.0
    }

    /// Frame square for an absolute (rank, file) pair, both 0-7.
    #[must_use]
    pub fn from_coords(rank: usize, file: usize, side: Color) -> Result<Self, SquareError> {
        if rank > 7 || file > 7 {
            return Err(SquareError::OffBoard { rank, file });
        }
        let white = Square((Square::A1.index() + file - 10 * rank) as u8);
        Ok(match side {
            Color::White => white,
            Color::Black => white.rotate(),
        })
    }

    /// Parse `e4`-style notation into the frame of the given active side.
    pub fn from_algebraic(notation: &str, side: Color) -> Result<Self, SquareError> {
        let invalid = || SquareError::BadName {
            text: notation.to_string(),
        };
        let bytes = notation.as_bytes();
        if bytes.len() != 2 || !(b'a'..=b'h').contains(&bytes[0]) || !(b'1'..=b'8').contains(&bytes[1]) {
            return Err(invalid());
        }
        let file = (bytes[0] - b'a') as usize;
        let rank = (bytes[1] - b'1') as usize;
        Square::from_coords(rank, file, side)
    }

    /// Absolute `e4`-style name of this frame square.
    #[must_use]
    pub fn to_algebraic(self, side: Color) -> String {
        let white = match side {
            Color::White => self,
            Color::Black => self.rotate(),
        };
        format!("{white}")
    }
}

/// Prints the square as it would be named if white were the active side.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_playable() {
            write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
        } else {
            write!(f, "#{}", self.0)
        }
    }
}
