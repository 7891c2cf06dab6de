//! Search tests to verify the engine finds correct moves in various positions.

use std::sync::atomic::AtomicBool;

use negamax_chess::board::{Position, Searcher, MATE_LOWER};
use negamax_chess::engine::{think, ThinkLimits, ThinkOutcome};

fn search_to_depth(fen: &str, depth: u32) -> (Position, ThinkOutcome) {
    let position = Position::from_fen(fen).expect("valid fen");
    let mut searcher = Searcher::new();
    let stop = AtomicBool::new(false);
    let limits = ThinkLimits::infinite().with_depth(depth);
    let outcome = think(&mut searcher, std::slice::from_ref(&position), &limits, &stop, |_| {});
    (position, outcome)
}

fn best_uci(position: &Position, outcome: &ThinkOutcome) -> String {
    outcome
        .best_move
        .map(|mv| mv.to_uci(position.side()))
        .expect("Should find a move")
}

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    // White to move, Qe8# is mate
    let (position, outcome) = search_to_depth("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", 5);
    assert_eq!(best_uci(&position, &outcome), "e1e8", "Should find Qe8# (back rank mate)");
    assert!(outcome.score >= MATE_LOWER / 2, "score {}", outcome.score);
}

/// Test that the engine finds a simple mate in 1 with queen
#[test]
fn finds_mate_in_one_queen() {
    // White to move, Qxf7# is mate
    let (position, outcome) = search_to_depth(
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4",
        5,
    );
    assert_eq!(best_uci(&position, &outcome), "h5f7", "Should find Qxf7# (scholar's mate)");
}

/// Test that the engine takes a hanging queen
#[test]
fn captures_free_queen() {
    let (position, outcome) = search_to_depth("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1", 3);
    assert_eq!(best_uci(&position, &outcome), "d1d5");
}

/// Test that black finds moves too, reported in absolute coordinates
#[test]
fn black_captures_free_queen() {
    let (position, outcome) = search_to_depth("3rk3/8/8/8/3Q4/8/8/4K3 b - - 0 1", 3);
    assert_eq!(best_uci(&position, &outcome), "d8d4");
}

/// Test that a checking piece left unprotected is taken
#[test]
fn takes_checking_rook() {
    // White king in the corner, checked by a loose rook
    let (position, outcome) = search_to_depth("8/8/8/8/8/8/8/Kr5k w - - 0 1", 3);
    assert_eq!(best_uci(&position, &outcome), "a1b1");
}

/// Test that a checkmated side reports no move
#[test]
fn no_move_in_checkmate() {
    // Fool's mate, white is checkmated
    let (_, outcome) = search_to_depth(
        "rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1",
        4,
    );
    assert!(outcome.terminal);
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.score, -MATE_LOWER);
}

/// Test that stalemate is scored as a draw
#[test]
fn identifies_stalemate() {
    let (_, outcome) = search_to_depth("k7/8/1QK5/8/8/8/8/8 b - - 0 1", 4);
    assert!(outcome.terminal);
    assert_eq!(outcome.score, 0);
}

/// Test that deepening keeps producing moves
#[test]
fn iterative_deepening_consistency() {
    for depth in 1..=4 {
        let (position, outcome) = search_to_depth(negamax_chess::board::START_FEN, depth);
        assert!(outcome.depth >= depth);
        assert!(position.parse_move(&best_uci(&position, &outcome)).is_ok());
    }
}

/// Test that node limits end the search once a move is known
#[test]
fn node_limit_stops_search() {
    let position = Position::new();
    let mut searcher = Searcher::new();
    let stop = AtomicBool::new(false);
    let limits = ThinkLimits::infinite().with_nodes(2_000);
    let outcome = think(&mut searcher, std::slice::from_ref(&position), &limits, &stop, |_| {});
    assert!(outcome.best_move.is_some());
    assert!(outcome.depth < 20);
}
