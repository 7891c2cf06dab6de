//! Errors returned when playing moves through [`Game`](super::Game).

use std::fmt;

use crate::board::{MoveParseError, Square};

/// Why a move was not committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No generated move goes from `from` to `to` (squares in the mover's frame)
    IllegalMove { from: Square, to: Square },
    /// The move would leave the mover's king attacked
    InCheck,
    /// The side to move has no move that keeps its king
    NoLegalMove,
    /// Coordinate text that does not name a move
    Notation(MoveParseError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove { from, to } => {
                write!(f, "No legal move from {from} to {to}")
            }
            GameError::InCheck => write!(f, "Move leaves the king in check"),
            GameError::NoLegalMove => write!(f, "No legal move available"),
            GameError::Notation(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Notation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveParseError> for GameError {
    fn from(err: MoveParseError) -> Self {
        GameError::Notation(err)
    }
}
