//! Bound search with iterative deepening.
//!
//! Features:
//! - Zero-window bound probes, binary-searched per depth (MTD-bi)
//! - Transposition bounds keyed by position, depth and null-move flag
//! - Null-move pruning
//! - Depth-scaled quiescence thresholds instead of a separate capture search
//! - Repetition and stalemate detection
//!
//! The search is a pull-based iterator: each call to `next` runs exactly one
//! probe and reports it. Stopping is the caller's business.

mod bound;
mod constants;
mod iterative;
mod params;

use std::collections::HashSet;

use crate::tt::TranspositionTable;

use super::{Move, Position};
pub use constants::{MATE_LOWER, MATE_UPPER};
pub use iterative::SearchIter;
pub use params::SearchParams;

/// One probe reported by the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchInfo {
    /// Nodes visited since the search started
    pub nodes: u64,
    pub depth: u32,
    /// Probe value the score was tested against
    pub gamma: i32,
    /// A lower bound if `score >= gamma`, otherwise an upper bound
    pub score: i32,
    /// Best move remembered for the root, in the root's frame
    pub best_move: Option<Move>,
}

impl SearchInfo {
    /// True if the probe proved the score at least `gamma`
    #[inline]
    #[must_use]
    pub const fn is_lower_bound(&self) -> bool {
        self.score >= self.gamma
    }
}

/// Search state: bounds, best-move hints, path history and node counter.
#[derive(Debug, Default)]
pub struct Searcher {
    pub(crate) tt: TranspositionTable,
    pub(crate) history: HashSet<Position>,
    pub(crate) nodes: u64,
    pub(crate) params: SearchParams,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Searcher::default()
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        Searcher {
            params,
            ..Searcher::default()
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn set_params(&mut self, params: SearchParams) {
        self.params = params;
    }

    /// Nodes visited since the last reset
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    #[must_use]
    pub fn table(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Remembered best move for a position
    #[must_use]
    pub fn best_move(&self, position: &Position) -> Option<Move> {
        self.tt.best_move(position)
    }

    /// Replace the set of positions treated as repetitions.
    pub fn set_history(&mut self, history: &[Position]) {
        self.history = history.iter().cloned().collect();
    }

    /// Forget everything, including best-move hints.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.history.clear();
        self.nodes = 0;
    }

    /// Coordinate moves obtained by following remembered best moves from
    /// `root`, stopping at a repeated position or after `limit` moves.
    #[must_use]
    pub fn principal_variation(&self, root: &Position, limit: usize) -> Vec<String> {
        let mut line = Vec::new();
        let mut seen = HashSet::new();
        let mut position = root.clone();
        while line.len() < limit {
            let Some(mv) = self.tt.best_move(&position) else {
                break;
            };
            if !seen.insert(position.clone()) {
                break;
            }
            line.push(mv.to_uci(position.side()));
            position = position.apply(mv);
        }
        line
    }
}
