//! The caller side of the search: pull probes until a budget runs out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::debug;

use super::time::TimeControl;
use crate::board::{Move, Position, SearchInfo, Searcher};

/// Default thinking time per move
pub const DEFAULT_MOVE_TIME: Duration = Duration::from_secs(2);

/// Longest principal variation reported with each probe
const PV_LIMIT: usize = 16;

/// Budgets for one engine move. Limits only end the search once a best
/// move is known; a search that never proves one runs to its depth cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThinkLimits {
    pub movetime: Option<Duration>,
    pub depth: Option<u32>,
    pub nodes: Option<u64>,
}

impl Default for ThinkLimits {
    fn default() -> Self {
        ThinkLimits {
            movetime: Some(DEFAULT_MOVE_TIME),
            depth: None,
            nodes: None,
        }
    }
}

impl ThinkLimits {
    /// No limits; only the stop flag ends the search.
    #[must_use]
    pub const fn infinite() -> Self {
        ThinkLimits {
            movetime: None,
            depth: None,
            nodes: None,
        }
    }

    #[must_use]
    pub fn from_time_control(control: TimeControl) -> Self {
        ThinkLimits {
            movetime: control.budget(),
            ..ThinkLimits::infinite()
        }
    }

    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    #[must_use]
    pub const fn with_nodes(mut self, nodes: u64) -> Self {
        self.nodes = Some(nodes);
        self
    }

    fn time_is_up(&self, elapsed: Duration) -> bool {
        self.movetime.is_some_and(|limit| elapsed > limit)
    }
}

/// Snapshot passed to the progress callback after each proven lower bound.
#[derive(Clone, Debug)]
pub struct ThinkProgress {
    pub info: SearchInfo,
    pub elapsed: Duration,
    /// Coordinate moves from the root
    pub pv: Vec<String>,
}

/// Result of [`think`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThinkOutcome {
    /// Best move in the root position's frame
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
    /// The root has no move that keeps the king
    pub terminal: bool,
}

/// Search the last position of `history` until `limits` or `stop` end it.
///
/// A probe that proves its gamma sets the best move. One that proves it
/// without any move means the side to move has nothing left to play, which
/// ends the search with `terminal` set.
pub fn think<F>(
    searcher: &mut Searcher,
    history: &[Position],
    limits: &ThinkLimits,
    stop: &AtomicBool,
    mut on_progress: F,
) -> ThinkOutcome
where
    F: FnMut(&ThinkProgress),
{
    let start = Instant::now();
    let mut outcome = ThinkOutcome::default();
    let Some(root) = history.last() else {
        return outcome;
    };

    let mut search = searcher.search(history);
    while let Some(info) = search.next() {
        let elapsed = start.elapsed();
        outcome.depth = info.depth;
        outcome.nodes = info.nodes;
        outcome.elapsed = elapsed;

        if info.is_lower_bound() {
            let Some(mv) = info.best_move else {
                outcome.terminal = true;
                outcome.score = info.score;
                break;
            };
            outcome.best_move = Some(mv);
            outcome.score = info.score;
            let pv = search.searcher().principal_variation(root, PV_LIMIT);
            on_progress(&ThinkProgress { info, elapsed, pv });
        }

        if outcome.best_move.is_none() {
            continue;
        }
        if stop.load(Ordering::Relaxed) || limits.time_is_up(elapsed) {
            break;
        }
        if limits.nodes.is_some_and(|n| info.nodes >= n) {
            break;
        }
        if search.depth_resolved() && limits.depth.is_some_and(|d| info.depth >= d) {
            break;
        }
    }

    debug!(
        "think: depth {} score {} nodes {} in {:?}{}",
        outcome.depth,
        outcome.score,
        outcome.nodes,
        outcome.elapsed,
        if outcome.terminal { " (no legal move)" } else { "" }
    );
    outcome
}
