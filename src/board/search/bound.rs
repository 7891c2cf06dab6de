use std::cmp::Reverse;

use super::{Searcher, MATE_LOWER, MATE_UPPER};
use crate::board::{Move, Position};
use crate::tt::Entry;

/// Raise `best` to `score`; true once it reaches `gamma`.
#[inline]
fn raise(best: &mut i32, score: i32, gamma: i32) -> bool {
    *best = (*best).max(score);
    *best >= gamma
}

impl Searcher {
    /// Zero-window probe of `position` against `gamma` at `depth`.
    ///
    /// The result is a lower bound on the true score if it is `>= gamma`,
    /// and an upper bound otherwise. `allow_null` is false only at the
    /// root and for shallow searches that fill the best-move cache.
    pub fn bound(&mut self, position: &Position, gamma: i32, depth: i32, allow_null: bool) -> i32 {
        self.nodes += 1;

        // Our king was taken on the previous move.
        if position.value() < -MATE_LOWER {
            return -MATE_UPPER;
        }

        let entry = self.tt.probe(position, depth, allow_null);
        if entry.lower >= gamma {
            return entry.lower;
        }
        if entry.upper < gamma {
            return entry.upper;
        }

        if allow_null && depth > 0 && self.history.contains(position) {
            return 0;
        }

        let mut best = self.best_candidate(position, gamma, depth, allow_null);

        // No move kept the king: mated if in check, otherwise stalemate.
        if depth > 2 && best == -MATE_UPPER {
            let in_check = self.bound(&position.rotate(true), MATE_UPPER, 0, true) == MATE_UPPER;
            best = if in_check { -MATE_LOWER } else { 0 };
        }

        // Stay inside what is already proven so stored bounds never cross.
        let best = best.max(entry.lower).min(entry.upper);
        let stored = if best >= gamma {
            Entry {
                lower: best,
                upper: entry.upper,
            }
        } else {
            Entry {
                lower: entry.lower,
                upper: best,
            }
        };
        self.tt.store(position, depth, allow_null, stored);

        best
    }

    /// Try the candidates in order and return the best score, stopping at
    /// the first one that reaches `gamma`.
    fn best_candidate(&mut self, position: &Position, gamma: i32, depth: i32, allow_null: bool) -> i32 {
        let mut best = -MATE_UPPER;

        if depth > 2 && allow_null && position.value().abs() < self.params.null_move_margin {
            let reduced = depth - self.params.null_reduction;
            let score = -self.bound(&position.rotate(true), 1 - gamma, reduced, true);
            if raise(&mut best, score, gamma) {
                return best;
            }
        }

        if depth == 0 && raise(&mut best, position.value(), gamma) {
            return best;
        }

        let threshold = self.params.quiescence_threshold(depth);

        let mut hint = self.tt.best_move(position);
        if hint.is_none() && depth > 2 {
            self.bound(position, gamma, depth - 3, false);
            hint = self.tt.best_move(position);
        }
        if let Some(mv) = hint {
            if position.points(mv) >= threshold {
                let score = -self.bound(&position.apply(mv), 1 - gamma, depth - 1, true);
                if raise(&mut best, score, gamma) {
                    self.tt.store_move(position, mv);
                    return best;
                }
            }
        }

        let mut scored: Vec<(i32, Move)> = position.moves().map(|mv| (position.points(mv), mv)).collect();
        scored.sort_by_key(|&(points, _)| Reverse(points));

        for (points, mv) in scored {
            if points < threshold {
                break;
            }
            if depth <= 1 && position.value() + points < gamma {
                let score = if points < MATE_LOWER {
                    position.value() + points
                } else {
                    MATE_UPPER
                };
                if raise(&mut best, score, gamma) {
                    self.tt.store_move(position, mv);
                }
                break;
            }
            let score = -self.bound(&position.apply(mv), 1 - gamma, depth - 1, true);
            if raise(&mut best, score, gamma) {
                self.tt.store_move(position, mv);
                break;
            }
        }

        best
    }
}
