//! Engine layer around the search.
//!
//! The search itself only answers probes. This module decides how long to
//! keep asking (`think`), turns clock settings into budgets (`time`) and
//! runs searches on a background thread that can be stopped (`controller`).

mod controller;
mod think;
pub mod time;

pub use controller::{EngineController, ProgressCallback, SearchJob};
pub use think::{think, ThinkLimits, ThinkOutcome, ThinkProgress, DEFAULT_MOVE_TIME};
pub use time::TimeControl;
