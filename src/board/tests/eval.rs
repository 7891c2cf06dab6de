//! Move points and static value.

use crate::board::{Move, Position, MATE_LOWER};

fn position(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid fen")
}

fn find(position: &Position, text: &str) -> Move {
    position.parse_move(text).expect("generated move")
}

#[test]
fn start_position_value() {
    let start = Position::new();
    assert_eq!(start.value(), 38);
    assert_eq!(start.static_value(), 38);
    assert_eq!(Position::from_fen(crate::board::START_FEN).unwrap().value(), 38);
}

#[test]
fn value_follows_quiet_moves() {
    let mut position = Position::new();
    for text in ["e2e4", "e7e5", "g1f3", "b8c6"] {
        let mv = find(&position, text);
        let expected = -(position.value() + position.points(mv));
        position = position.apply(mv);
        assert_eq!(position.value(), expected);
        assert_eq!(position.value(), position.static_value());
    }
}

#[test]
fn capture_scores_at_least_the_quiet_delta() {
    // Same rook move with and without a knight on the target square.
    let quiet = position("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let capture = position("4k3/8/8/8/n7/8/8/R3K3 w - - 0 1");
    let quiet_points = quiet.points(find(&quiet, "a1a4"));
    let capture_points = capture.points(find(&capture, "a1a4"));
    assert!(capture_points >= quiet_points);
    assert_eq!(capture_points - quiet_points, 280);
}

#[test]
fn promotion_is_worth_more_than_a_push() {
    let start = position("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let queen = start.points(find(&start, "e7e8q"));
    let knight = start.points(find(&start, "e7e8n"));
    assert!(queen > knight);
    assert!(queen > 700);
}

#[test]
fn en_passant_counts_the_taken_pawn() {
    let start = position("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let take = start.points(find(&start, "e5f6"));
    let push = start.points(find(&start, "e5e6"));
    assert!(take > push + 50);
}

#[test]
fn castling_includes_the_rook_move() {
    let start = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = find(&start, "e1g1");
    let after = start.apply(mv);
    assert_eq!(after.value(), -(start.value() + start.points(mv)));
    assert_eq!(after.value(), after.static_value());
}

#[test]
fn capturing_through_king_passant_takes_the_king() {
    let start = position("4k3/8/8/8/8/8/5p2/4K2R w K - 0 1");
    let castled = start.apply_uci("e1g1").unwrap();
    let mv = find(&castled, "f2e1q");
    assert!(castled.points(mv) >= MATE_LOWER);
}

#[test]
fn non_friendly_origin_scores_zero() {
    let start = Position::new();
    let bogus = Move::new(crate::board::Square::A8, crate::board::Square::A1);
    assert_eq!(start.points(bogus), 0);
}
