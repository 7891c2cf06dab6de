use super::position::Position;

impl Position {
    /// Count leaf nodes of the pseudo-legal move tree to `depth` plies.
    ///
    /// Nothing is filtered for self-check, so deep counts drift from the
    /// published legal-move figures once kings can be exposed.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        if depth == 1 {
            return self.moves().count() as u64;
        }
        self.moves().map(|mv| self.apply(mv).perft(depth - 1)).sum()
    }

    /// Per-move breakdown of [`Position::perft`], in coordinate notation.
    #[must_use]
    pub fn divide(&self, depth: usize) -> Vec<(String, u64)> {
        let child_depth = depth.saturating_sub(1);
        self.moves()
            .map(|mv| (mv.to_uci(self.side()), self.apply(mv).perft(child_depth)))
            .collect()
    }
}
