//! Parse failures for squares, FEN records and coordinate moves.
//!
//! Squares are always named in white's orientation; errors carry the text
//! the caller supplied, never a frame index.

use std::fmt;

use super::types::Color;

/// A square name or coordinate pair that does not land on the 8x8 board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Zero-based rank and file, at least one of them above 7
    OffBoard { rank: usize, file: usize },
    /// Not a file letter `a`-`h` followed by a rank digit `1`-`8`
    BadName { text: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OffBoard { rank, file } => {
                write!(f, "rank {rank}, file {file} is off the board")
            }
            SquareError::BadName { text } => write!(f, "'{text}' is not a square name"),
        }
    }
}

impl std::error::Error for SquareError {}

/// Which part of a FEN record was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four fields up to en passant
    MissingFields { found: usize },
    /// Placement does not split into eight ranks
    RankCount { found: usize },
    /// A rank (1-8) whose pieces and gaps do not add up to eight files
    RankWidth { rank: usize, width: usize },
    /// A letter in the placement field that names no piece
    UnknownPiece { rank: usize, letter: char },
    SideToMove { found: String },
    Castling { found: String },
    EnPassant { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingFields { found } => {
                write!(f, "FEN has {found} fields, placement, side, castling and en passant are required")
            }
            FenError::RankCount { found } => write!(f, "FEN placement has {found} ranks instead of 8"),
            FenError::RankWidth { rank, width } => {
                write!(f, "FEN rank {rank} is {width} files wide")
            }
            FenError::UnknownPiece { rank, letter } => {
                write!(f, "FEN rank {rank} has unknown piece '{letter}'")
            }
            FenError::SideToMove { found } => write!(f, "FEN side to move '{found}' is neither w nor b"),
            FenError::Castling { found } => write!(f, "FEN castling field '{found}' is not made of KQkq or -"),
            FenError::EnPassant { found } => write!(f, "FEN en passant field '{found}' is not a square"),
        }
    }
}

impl std::error::Error for FenError {}

/// Coordinate text that does not name a move in the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Coordinate moves are four characters, five with a promotion letter
    Length { text: String },
    Square { text: String, source: SquareError },
    /// Only n, b, r and q may follow the destination square
    Promotion { text: String, letter: char },
    /// Well formed, but nothing the side to move can play
    NotGenerated { text: String, side: Color },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Length { text } => {
                write!(f, "'{text}' is not a 4 or 5 character coordinate move")
            }
            MoveParseError::Square { text, source } => write!(f, "in '{text}': {source}"),
            MoveParseError::Promotion { text, letter } => {
                write!(f, "'{text}' promotes to '{letter}', expected one of n, b, r, q")
            }
            MoveParseError::NotGenerated { text, side } => write!(f, "{side} has no move {text}"),
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::Square { source, .. } => Some(source),
            _ => None,
        }
    }
}
