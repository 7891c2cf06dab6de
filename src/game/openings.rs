//! Opening lines the engine may follow for its first moves.
//!
//! A line is a list of `(from, to)` pairs in absolute coordinates, written
//! as coordinate moves (`e2e4 e7e5 g1f3`). Both sides' moves are listed;
//! the engine plays the next entry when it matches a legal move and the
//! line still has engine plies left.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Color, Move, Square, SquareError};

/// Engine plies a line may supply before the search takes over
pub const DEFAULT_PLY_LIMIT: u32 = 2;

/// Lines used by [`OpeningBook::standard`]
const STANDARD_LINES: &str = "\
e2e4 e7e5 g1f3 b8c6
e2e4 c7c5 g1f3 d7d6
e2e4 e7e6 d2d4 d7d5
e2e4 c7c6 d2d4 d7d5
d2d4 d7d5 c2c4 e7e6
d2d4 g8f6 c2c4 g7g6
c2c4 e7e5 b1c3 g8f6
g1f3 d7d5 g2g3 g8f6
";

/// One opening line being followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningLine {
    entries: VecDeque<(Square, Square)>,
    plies_left: u32,
}

impl OpeningLine {
    /// Line from absolute square pairs (white's frame)
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (Square, Square)>) -> Self {
        OpeningLine {
            entries: entries.into_iter().collect(),
            plies_left: DEFAULT_PLY_LIMIT,
        }
    }

    /// Parse whitespace-separated coordinate moves. Promotion letters are
    /// not allowed; only the squares are kept.
    pub fn from_uci(text: &str) -> Result<Self, SquareError> {
        let entries = text
            .split_whitespace()
            .map(|token| {
                if token.len() != 4 || !token.is_ascii() {
                    return Err(SquareError::BadName {
                        text: token.to_string(),
                    });
                }
                let from = Square::from_algebraic(&token[0..2], Color::White)?;
                let to = Square::from_algebraic(&token[2..4], Color::White)?;
                Ok((from, to))
            })
            .collect::<Result<VecDeque<_>, _>>()?;
        Ok(OpeningLine {
            entries,
            plies_left: DEFAULT_PLY_LIMIT,
        })
    }

    #[must_use]
    pub const fn with_ply_limit(mut self, plies: u32) -> Self {
        self.plies_left = plies;
        self
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.plies_left == 0 || self.entries.is_empty()
    }

    /// Remaining entries, absolute
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }

    /// Consume the next entry for an engine ply.
    ///
    /// Returns the candidate matching both squares in `side`'s frame, if
    /// any. The entry and one ply are used up either way.
    pub fn next_for(&mut self, side: Color, candidates: &[Move]) -> Option<Move> {
        if self.plies_left == 0 {
            return None;
        }
        let (from, to) = self.entries.pop_front()?;
        self.plies_left -= 1;
        let (from, to) = (to_frame(from, side), to_frame(to, side));
        candidates
            .iter()
            .copied()
            .find(|mv| mv.from() == from && mv.to() == to)
    }

    /// Record a move played by `side`. Matching the next entry consumes it;
    /// anything else abandons the line.
    pub fn observe(&mut self, side: Color, mv: Move) {
        let matches = self
            .entries
            .front()
            .is_some_and(|&(from, to)| to_frame(from, side) == mv.from() && to_frame(to, side) == mv.to());
        if matches {
            self.entries.pop_front();
        } else {
            self.entries.clear();
        }
    }
}

fn to_frame(square: Square, side: Color) -> Square {
    match side {
        Color::White => square,
        Color::Black => square.rotate(),
    }
}

/// A set of opening lines to pick from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningBook {
    lines: Vec<OpeningLine>,
}

impl OpeningBook {
    /// Parse one line per row. Blank rows and rows starting with `#` are
    /// skipped.
    pub fn parse(text: &str) -> Result<Self, SquareError> {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|row| !row.is_empty() && !row.starts_with('#'))
            .map(OpeningLine::from_uci)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(OpeningBook { lines })
    }

    /// A few common openings
    #[must_use]
    pub fn standard() -> Self {
        // built-in text is well formed
        OpeningBook::parse(STANDARD_LINES).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[OpeningLine] {
        &self.lines
    }

    /// Pick a line at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<OpeningLine> {
        self.lines.choose(rng).cloned()
    }

    /// Pick a line with the thread-local generator
    #[must_use]
    pub fn choose_random(&self) -> Option<OpeningLine> {
        self.choose(&mut rand::thread_rng())
    }
}
