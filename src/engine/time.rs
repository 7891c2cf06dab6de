//! Time control for engine moves.
//!
//! The search itself knows nothing about clocks; this module turns the
//! protocol's time settings into a per-move budget for the think loop.

use std::time::Duration;

/// Moves-to-go estimate when the protocol gives none
pub const DEFAULT_MOVES_TO_GO: u64 = 30;

/// Reserved for communication latency
const MOVE_OVERHEAD_MS: u64 = 50;

/// Time control settings for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeControl {
    /// No time limit; stopped externally or by depth/nodes
    #[default]
    Infinite,
    /// Fixed time per move
    MoveTime { time_ms: u64 },
    /// Remaining clock time plus increment
    Incremental {
        time_left_ms: u64,
        inc_ms: u64,
        movestogo: Option<u64>,
    },
}

impl TimeControl {
    /// Create a fixed move time control from Duration.
    #[must_use]
    pub fn move_time(time: Duration) -> Self {
        TimeControl::MoveTime {
            time_ms: time.as_millis() as u64,
        }
    }

    /// Create a new incremental time control from Duration values.
    #[must_use]
    pub fn incremental(time_left: Duration, inc: Duration, movestogo: Option<u64>) -> Self {
        TimeControl::Incremental {
            time_left_ms: time_left.as_millis() as u64,
            inc_ms: inc.as_millis() as u64,
            movestogo,
        }
    }

    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        matches!(self, TimeControl::Infinite)
    }

    /// Thinking time for the next move, or `None` when unlimited.
    ///
    /// With a running clock the budget is an even share of the remaining
    /// time plus the increment, never more than half of what is left.
    #[must_use]
    pub fn budget(&self) -> Option<Duration> {
        match *self {
            TimeControl::Infinite => None,
            TimeControl::MoveTime { time_ms } => Some(Duration::from_millis(time_ms.max(1))),
            TimeControl::Incremental {
                time_left_ms,
                inc_ms,
                movestogo,
            } => {
                let safe_ms = time_left_ms.saturating_sub(MOVE_OVERHEAD_MS);
                let moves_to_go = movestogo.unwrap_or(DEFAULT_MOVES_TO_GO).max(1);
                let share = safe_ms / moves_to_go + inc_ms;
                Some(Duration::from_millis(share.min(safe_ms / 2).max(1)))
            }
        }
    }
}
