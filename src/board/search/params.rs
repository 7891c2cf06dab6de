/// Tunable search parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Quiescence threshold at depth zero
    pub qs: i32,
    /// Threshold decrease per remaining ply
    pub qs_depth_step: i32,
    /// Window width below which a depth is considered resolved
    pub eval_roughness: i32,
    /// Null-move pruning is skipped when `|value|` reaches this
    pub null_move_margin: i32,
    pub null_reduction: i32,
    pub max_depth: u32,
}

impl SearchParams {
    /// Lowest move score still searched at `depth`
    #[inline]
    #[must_use]
    pub fn quiescence_threshold(&self, depth: i32) -> i32 {
        self.qs - depth * self.qs_depth_step
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            qs: 40,
            qs_depth_step: 140,
            eval_roughness: 15,
            null_move_margin: 500,
            null_reduction: 3,
            max_depth: 1000,
        }
    }
}
