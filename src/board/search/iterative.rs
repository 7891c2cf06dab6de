use log::trace;

use super::{SearchInfo, Searcher, MATE_LOWER};
use crate::board::Position;

/// Iterative deepening over zero-window probes.
///
/// Every `next` runs one probe at the current depth, narrowing the window
/// `[lower, upper]` around the root score. A depth is finished once the
/// window is within the roughness margin; the probe value carries over to
/// the next depth. The iterator ends after the maximum depth.
pub struct SearchIter<'a> {
    searcher: &'a mut Searcher,
    root: Option<Position>,
    depth: u32,
    lower: i32,
    upper: i32,
    gamma: i32,
}

impl<'a> SearchIter<'a> {
    fn new(searcher: &'a mut Searcher, root: Option<Position>) -> Self {
        SearchIter {
            searcher,
            root,
            depth: 1,
            lower: -MATE_LOWER,
            upper: MATE_LOWER,
            gamma: 0,
        }
    }

    /// Depth of the next probe
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// True once the window for the current depth has closed to within the
    /// roughness margin, so the next probe starts a deeper iteration.
    #[must_use]
    pub fn depth_resolved(&self) -> bool {
        self.lower >= self.upper - self.searcher.params.eval_roughness
    }

    /// The searcher driving this iterator
    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        self.searcher
    }
}

impl Iterator for SearchIter<'_> {
    type Item = SearchInfo;

    fn next(&mut self) -> Option<SearchInfo> {
        let root = self.root.as_ref()?;
        let roughness = self.searcher.params.eval_roughness;
        while self.lower >= self.upper - roughness {
            self.depth += 1;
            self.lower = -MATE_LOWER;
            self.upper = MATE_LOWER;
        }
        if self.depth > self.searcher.params.max_depth {
            return None;
        }

        let gamma = self.gamma;
        let score = self.searcher.bound(root, gamma, self.depth as i32, false);
        if score >= gamma {
            self.lower = score;
        } else {
            self.upper = score;
        }

        let info = SearchInfo {
            nodes: self.searcher.nodes,
            depth: self.depth,
            gamma,
            score,
            best_move: self.searcher.tt.best_move(root),
        };
        trace!(
            "probe depth {} gamma {} score {} nodes {}",
            info.depth,
            info.gamma,
            info.score,
            info.nodes
        );

        self.gamma = (self.lower + self.upper + 1).div_euclid(2);
        Some(info)
    }
}

impl Searcher {
    /// Start an iterative-deepening search of the last position in
    /// `history`; earlier positions count as repetitions.
    ///
    /// Resets the node counter and the score bounds. Remembered best moves
    /// survive from earlier searches. An empty history yields nothing.
    pub fn search(&mut self, history: &[Position]) -> SearchIter<'_> {
        self.nodes = 0;
        self.set_history(history);
        self.tt.clear_scores();
        let root = history.last().cloned();
        SearchIter::new(self, root)
    }
}
