//! Search score constants.

use crate::board::Piece;

/// Scores at or above this mean a king is lost somewhere in the line
pub const MATE_LOWER: i32 = Piece::King.value() - 10 * Piece::Queen.value();

/// Upper end of the score range; returned for a position whose king is gone
pub const MATE_UPPER: i32 = Piece::King.value() + 10 * Piece::Queen.value();
