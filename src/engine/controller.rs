//! Engine controller implementation.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::warn;
use parking_lot::Mutex;

use super::think::{think, ThinkLimits, ThinkOutcome, ThinkProgress};
use crate::board::{MoveParseError, Position, SearchParams, Searcher};

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Callback for per-probe progress reports
pub type ProgressCallback = Arc<dyn Fn(&ThinkProgress) + Send + Sync>;

/// Active search job state
pub struct SearchJob {
    /// Stop flag for the search
    pub stop: Arc<AtomicBool>,
    /// Handle to the search thread
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Stop the search and wait for the thread to finish
    pub fn stop_and_wait(self) {
        self.stop.store(true, Ordering::Relaxed);
        self.wait();
    }

    /// Wait for the search to end on its own
    pub fn wait(self) {
        if self.handle.join().is_err() {
            warn!("search thread panicked");
        }
    }

    /// Signal stop without waiting
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Engine controller managing search and game state
pub struct EngineController {
    /// Positions since the last reset, current one last
    history: Vec<Position>,
    /// Searcher shared with the search thread
    searcher: Arc<Mutex<Searcher>>,
    /// Active search job (if any)
    current_job: Option<SearchJob>,
    /// Optional callback for per-probe info
    info_callback: Option<ProgressCallback>,
}

impl Default for EngineController {
    fn default() -> Self {
        EngineController::new()
    }
}

impl EngineController {
    /// Create a new engine controller at the starting position
    #[must_use]
    pub fn new() -> Self {
        EngineController {
            history: vec![Position::new()],
            searcher: Arc::new(Mutex::new(Searcher::new())),
            current_job: None,
            info_callback: None,
        }
    }

    /// The current position
    #[must_use]
    pub fn position(&self) -> &Position {
        // history is never empty
        &self.history[self.history.len() - 1]
    }

    #[must_use]
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Set the root position, forgetting the game so far
    pub fn set_position(&mut self, position: Position) {
        self.stop_search();
        self.history = vec![position];
    }

    /// Replace the game history. An empty history means the start position.
    pub fn set_history(&mut self, history: Vec<Position>) {
        self.stop_search();
        self.history = if history.is_empty() {
            vec![Position::new()]
        } else {
            history
        };
    }

    /// Play a coordinate move on the current position
    pub fn play_uci(&mut self, text: &str) -> Result<(), MoveParseError> {
        self.stop_search();
        let next = self.position().apply_uci(text)?;
        self.history.push(next);
        Ok(())
    }

    /// Get a reference to the shared searcher
    #[must_use]
    pub fn searcher(&self) -> &Arc<Mutex<Searcher>> {
        &self.searcher
    }

    /// Replace the search tunables
    pub fn set_params(&mut self, params: SearchParams) {
        self.stop_search();
        self.searcher.lock().set_params(params);
    }

    /// Reset to the starting position and forget all search state
    pub fn new_game(&mut self) {
        self.stop_search();
        self.history = vec![Position::new()];
        self.searcher.lock().clear();
    }

    /// Stop any active search
    pub fn stop_search(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.stop_and_wait();
        }
    }

    /// Signal stop to active search (non-blocking)
    pub fn signal_stop(&mut self) {
        if let Some(job) = &self.current_job {
            job.signal_stop();
        }
    }

    /// Block until the active search finishes by itself
    pub fn wait(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.wait();
        }
    }

    /// Check if there's an active search
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.as_ref().is_some_and(|job| !job.is_finished())
    }

    /// Set callback for per-probe info reporting.
    pub fn set_info_callback(&mut self, cb: Option<ProgressCallback>) {
        self.info_callback = cb;
    }

    /// Start a search of the current position on a background thread.
    ///
    /// `on_complete` receives the root and the outcome when the search ends.
    pub fn start_search<F>(&mut self, limits: ThinkLimits, on_complete: F) -> io::Result<()>
    where
        F: FnOnce(&Position, ThinkOutcome) + Send + 'static,
    {
        self.stop_search();

        let stop = Arc::new(AtomicBool::new(false));
        let stop_clone = Arc::clone(&stop);
        let searcher = Arc::clone(&self.searcher);
        let history = self.history.clone();
        let info_callback = self.info_callback.clone();

        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let mut guard = searcher.lock();
                let outcome = think(&mut guard, &history, &limits, &stop_clone, |progress| {
                    if let Some(cb) = &info_callback {
                        cb(progress);
                    }
                });
                drop(guard);
                if let Some(root) = history.last() {
                    on_complete(root, outcome);
                }
            })?;

        self.current_job = Some(SearchJob { stop, handle });
        Ok(())
    }
}

impl Drop for EngineController {
    fn drop(&mut self) {
        self.stop_search();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn play_uci_extends_history() {
        let mut controller = EngineController::new();
        controller.play_uci("e2e4").unwrap();
        assert_eq!(controller.history().len(), 2);
        assert!(controller.play_uci("e2e4").is_err());
        assert_eq!(controller.history().len(), 2);
    }

    #[test]
    fn background_search_reports_a_move() {
        let mut controller = EngineController::new();
        let (tx, rx) = mpsc::channel();
        controller
            .start_search(ThinkLimits::infinite().with_depth(2), move |root, outcome| {
                let text = outcome.best_move.map(|mv| mv.to_uci(root.side()));
                tx.send(text).unwrap();
            })
            .unwrap();
        controller.wait();
        let best = rx.recv().unwrap();
        assert!(best.is_some());
        assert!(!controller.is_searching());
    }

    #[test]
    fn stop_ends_an_infinite_search() {
        let mut controller = EngineController::new();
        let (tx, rx) = mpsc::channel();
        controller
            .start_search(ThinkLimits::infinite(), move |_, outcome| {
                tx.send(outcome.best_move.is_some()).unwrap();
            })
            .unwrap();
        controller.stop_search();
        assert!(rx.recv().unwrap());
    }
}
