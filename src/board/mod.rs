//! Chess positions, move generation and search.
//!
//! Positions live on a padded 10x12 board and are always seen from the side
//! to move. Every move returns a new position rotated to the opponent, so
//! generation and scoring never branch on color.
//!
//! # Example
//! ```
//! use negamax_chess::board::Position;
//!
//! let position = Position::new();
//! println!("Starting position has {} moves", position.moves().count());
//! ```

mod check;
mod error;
mod eval;
mod fen;
mod movegen;
mod perft;
mod position;
mod pst;
pub mod search;
mod types;

#[cfg(test)]
mod tests;

pub use check::in_check;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use movegen::MoveGen;
pub use position::Position;
pub use types::{CastlingRights, Cell, Color, Move, Piece, Square, BOARD_CELLS};

pub use search::{SearchInfo, SearchIter, SearchParams, Searcher, MATE_LOWER, MATE_UPPER};
