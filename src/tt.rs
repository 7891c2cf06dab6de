//! Transposition tables for the bound search.
//!
//! Two maps, both keyed by the full position value:
//! - score bounds per `(position, depth, allow_null)`, cleared at the start
//!   of every search;
//! - the move that last reached its probe value per position, kept across
//!   searches as an ordering hint.

use std::collections::HashMap;

use crate::board::search::MATE_UPPER;
use crate::board::{Move, Position};

/// Proven bounds on a position's score: `lower <= score <= upper`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub lower: i32,
    pub upper: i32,
}

impl Entry {
    /// Bounds of a position nothing is known about
    pub const UNKNOWN: Entry = Entry {
        lower: -MATE_UPPER,
        upper: MATE_UPPER,
    };
}

impl Default for Entry {
    fn default() -> Self {
        Entry::UNKNOWN
    }
}

type ScoreKey = (Position, i32, bool);

#[derive(Debug, Default)]
pub struct TranspositionTable {
    scores: HashMap<ScoreKey, Entry>,
    moves: HashMap<Position, Move>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        TranspositionTable::default()
    }

    /// Stored bounds, or [`Entry::UNKNOWN`]
    #[must_use]
    pub fn probe(&self, position: &Position, depth: i32, allow_null: bool) -> Entry {
        self.scores
            .get(&(position.clone(), depth, allow_null))
            .copied()
            .unwrap_or_default()
    }

    pub fn store(&mut self, position: &Position, depth: i32, allow_null: bool, entry: Entry) {
        debug_assert!(entry.lower <= entry.upper, "inverted bounds {entry:?}");
        self.scores.insert((position.clone(), depth, allow_null), entry);
    }

    #[must_use]
    pub fn best_move(&self, position: &Position) -> Option<Move> {
        self.moves.get(position).copied()
    }

    pub fn store_move(&mut self, position: &Position, mv: Move) {
        self.moves.insert(position.clone(), mv);
    }

    /// Drop all score bounds; best moves are kept.
    pub fn clear_scores(&mut self) {
        self.scores.clear();
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.scores.clear();
        self.moves.clear();
    }

    /// Number of stored score entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of positions with a remembered best move
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// All stored score entries with their keys
    pub fn entries(&self) -> impl Iterator<Item = (&Position, i32, bool, Entry)> + '_ {
        self.scores
            .iter()
            .map(|((position, depth, allow_null), entry)| (position, *depth, *allow_null, *entry))
    }
}
