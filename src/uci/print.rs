use std::time::Duration;

use crate::board::{Move, Position};
use crate::engine::ThinkProgress;

pub fn print_ready() {
    println!("readyok");
}

/// `bestmove` for a move in `root`'s frame, `0000` when there is none
pub fn print_bestmove(root: &Position, best_move: Option<Move>) {
    println!("{}", format_bestmove(root, best_move));
}

#[must_use]
pub fn format_bestmove(root: &Position, best_move: Option<Move>) -> String {
    match best_move {
        Some(mv) => format!("bestmove {}", mv.to_uci(root.side())),
        None => "bestmove 0000".to_string(),
    }
}

pub fn print_info(progress: &ThinkProgress) {
    println!("{}", format_info(progress));
}

#[must_use]
pub fn format_info(progress: &ThinkProgress) -> String {
    let info = &progress.info;
    let mut line = format!(
        "info depth {} score cp {} nodes {} time {}",
        info.depth,
        info.score,
        info.nodes,
        progress.elapsed.as_millis()
    );
    if !progress.pv.is_empty() {
        line.push_str(" pv ");
        line.push_str(&progress.pv.join(" "));
    }
    line
}

pub fn print_perft_info(depth: usize, nodes: u64, elapsed: Duration) {
    println!(
        "info string perft depth {} nodes {} time_ms {}",
        depth,
        nodes,
        elapsed.as_millis()
    );
}
