//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - index into the padded 120-cell board
//! - `Cell` - board cell contents relative to the side to move
//! - `Move` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod cell;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use cell::Cell;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::{Square, BOARD_CELLS};

pub(crate) use piece::PROMOTION_PIECES;
pub(crate) use square::{E, N, S, W};
