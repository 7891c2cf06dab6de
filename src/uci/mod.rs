//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Handles communication with chess GUIs following the UCI specification.
//! Searches run on the controller's background thread so `stop` and
//! `isready` are answered while the engine thinks.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, warn};

use crate::board::{FenError, MoveParseError, Position};
use crate::engine::{EngineController, ProgressCallback};

pub mod command;
pub mod logger;
pub mod options;
pub mod print;
pub mod time;

use command::{parse_uci_command, UciCommand};
use options::{parse_setoption, UciOptions};
use time::GoParams;

/// Error type for UCI position command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove { move_str: String, error: MoveParseError },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Parse a UCI position command into the game history it describes,
/// current position last.
///
/// Supports both "position startpos" and "position fen <fen>" formats,
/// optionally followed by "moves <move1> <move2> ...".
pub fn try_parse_position_command(parts: &[&str]) -> Result<Vec<Position>, UciError> {
    let mut i = 1;

    let root = match parts.get(i) {
        Some(&"startpos") => {
            i += 1;
            Position::new()
        }
        Some(&"fen") => {
            i += 1;
            let start = i;
            while i < parts.len() && parts[i] != "moves" {
                i += 1;
            }
            if i == start {
                return Err(UciError::MissingParts);
            }
            Position::from_fen(&parts[start..i].join(" "))?
        }
        _ => return Err(UciError::MissingParts),
    };

    let mut history = vec![root];
    if parts.get(i) == Some(&"moves") {
        for move_str in &parts[i + 1..] {
            let current = &history[history.len() - 1];
            let next = current.apply_uci(move_str).map_err(|error| UciError::InvalidMove {
                move_str: (*move_str).to_string(),
                error,
            })?;
            history.push(next);
        }
    }

    Ok(history)
}

/// Read commands from stdin until `quit` or end of input.
pub fn run_uci_loop() {
    logger::init();

    let stdin = io::stdin();
    let mut controller = EngineController::new();
    let mut options = UciOptions::new();
    let info_callback: ProgressCallback = Arc::new(print::print_info);
    controller.set_info_callback(Some(info_callback));

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let Some(command) = parse_uci_command(&line) else {
            continue;
        };

        match command {
            UciCommand::Uci => options.print(),
            UciCommand::IsReady => print::print_ready(),
            UciCommand::UciNewGame => controller.new_game(),
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                match try_parse_position_command(&parts) {
                    Ok(history) => controller.set_history(history),
                    Err(e) => warn!("{e}"),
                }
            }
            UciCommand::Go(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let side = controller.position().side();
                let limits = GoParams::parse(&parts).limits(side, options.move_time());
                debug!("go with {limits:?}");
                let started = controller.start_search(limits, |root, outcome| {
                    print::print_bestmove(root, outcome.best_move);
                    let _ = io::stdout().flush();
                });
                if let Err(e) = started {
                    warn!("could not start search: {e}");
                    print::print_bestmove(controller.position(), None);
                }
            }
            UciCommand::Stop => controller.stop_search(),
            UciCommand::Perft(depth) => {
                controller.stop_search();
                let start = Instant::now();
                let nodes = controller.position().perft(depth);
                print::print_perft_info(depth, nodes, start.elapsed());
            }
            UciCommand::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                match parse_setoption(&parts) {
                    Some((name, value)) if options.apply_setoption(&name, value.as_deref()) => {
                        controller.set_params(options.params.clone());
                    }
                    Some((name, _)) => warn!("unknown or invalid option '{name}'"),
                    None => warn!("malformed setoption"),
                }
            }
            UciCommand::Debug(mode) => logger::set_debug(mode.as_deref() != Some("off")),
            UciCommand::Quit => break,
            UciCommand::Unknown(text) => debug!("ignoring '{text}'"),
        }

        let _ = io::stdout().flush();
    }

    controller.stop_search();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_with_moves_builds_history() {
        let history = try_parse_position_command(&["position", "startpos", "moves", "e2e4", "e7e5"]).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[2], Position::new().apply_uci("e2e4").unwrap().apply_uci("e7e5").unwrap());
    }

    #[test]
    fn fen_without_counters_is_accepted() {
        let parts = ["position", "fen", "8/4P3/8/8/8/8/k7/4K3", "w", "-", "-", "moves", "e7e8q"];
        let history = try_parse_position_command(&parts).unwrap();
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn bad_move_is_reported() {
        let err = try_parse_position_command(&["position", "startpos", "moves", "e2e5"]).unwrap_err();
        assert!(matches!(err, UciError::InvalidMove { ref move_str, .. } if move_str == "e2e5"));
    }

    #[test]
    fn missing_parts() {
        assert_eq!(try_parse_position_command(&["position"]), Err(UciError::MissingParts));
        assert_eq!(
            try_parse_position_command(&["position", "fen", "moves"]),
            Err(UciError::MissingParts)
        );
    }
}
