//! Rotation, move application and board text.

use crate::board::{CastlingRights, Cell, Color, Piece, Position, Square};

fn position(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid fen")
}

#[test]
fn rotate_twice_is_identity() {
    let start = Position::new().apply_uci("e2e4").unwrap();
    assert_eq!(start.rotate(false).rotate(false), start);
}

#[test]
fn null_rotation_drops_passant_squares() {
    let after = Position::new().apply_uci("e2e4").unwrap();
    assert!(after.en_passant().is_some());
    let passed = after.rotate(true);
    assert_eq!(passed.en_passant(), None);
    assert_eq!(passed.side(), Color::White);
    assert_eq!(passed.rotate(true).board_string(), after.board_string());
}

#[test]
fn rotation_swaps_ownership_and_negates_value() {
    let start = Position::new();
    let rotated = start.rotate(false);
    assert_eq!(rotated.value(), -start.value());
    assert_eq!(rotated.cell(Square::A1), Cell::Friendly(Piece::Rook));
    assert_eq!(rotated.cell(Square::A8), Cell::Enemy(Piece::Rook));
}

#[test]
fn quiet_move_is_reversible() {
    let start = Position::new();
    let moved = start.apply_uci("g1f3").unwrap().rotate(true);
    let back = moved.apply_uci("f3g1").unwrap().rotate(true);
    assert_eq!(back.board_string(), start.board_string());
}

#[test]
fn board_string_layout() {
    let text = Position::new().board_string();
    assert_eq!(text.len(), 120);
    assert_eq!(&text[20..30], " rnbqkbnr ");
    assert_eq!(&text[90..100], " RNBQKBNR ");
    assert!(text[..20].chars().all(|c| c == ' '));
}

#[test]
fn black_frame_is_turned_half_a_circle() {
    let black = Position::new().apply_uci("e2e4").unwrap();
    // Black's own king stands on frame d1.
    let king = black.king_square().unwrap();
    assert_eq!(king.to_algebraic(Color::Black), "e8");
    assert_eq!(format!("{king}"), "d1");
    assert_eq!(black.piece_at(3, 4), Some((Color::White, Piece::Pawn)));
}

#[test]
fn double_step_sets_en_passant() {
    let after = Position::new().apply_uci("e2e4").unwrap();
    let ep = after.en_passant().unwrap();
    assert_eq!(ep.to_algebraic(Color::Black), "e3");
}

#[test]
fn en_passant_capture_removes_pawn() {
    let start = position("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let after = start.apply_uci("e5f6").unwrap();
    assert_eq!(after.piece_at(4, 5), None);
    assert_eq!(after.piece_at(5, 5), Some((Color::White, Piece::Pawn)));
}

#[test]
fn castling_moves_rook_and_sets_king_passant() {
    let start = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let after = start.apply_uci("e1g1").unwrap();
    assert_eq!(after.piece_at(0, 6), Some((Color::White, Piece::King)));
    assert_eq!(after.piece_at(0, 5), Some((Color::White, Piece::Rook)));
    assert_eq!(after.piece_at(0, 7), None);
    assert_eq!(after.king_passant().map(|sq| sq.to_algebraic(Color::Black)), Some("f1".to_string()));
    assert!(!after.castling().has(Color::White, true));
    assert!(!after.castling().has(Color::White, false));
    assert!(after.castling().has(Color::Black, true));
}

#[test]
fn rook_moves_and_captures_revoke_rights() {
    let start = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let after = start.apply_uci("a1a8").unwrap();
    let mut expected = CastlingRights::all();
    expected.remove(Color::White, false);
    expected.remove(Color::Black, false);
    assert_eq!(after.castling(), expected);
}

#[test]
fn promotion_defaults_to_queen() {
    let start = position("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let after = start.apply_uci("e7e8").unwrap();
    assert_eq!(after.piece_at(7, 4), Some((Color::White, Piece::Queen)));
    let knight = start.apply_uci("e7e8n").unwrap();
    assert_eq!(knight.piece_at(7, 4), Some((Color::White, Piece::Knight)));
}

#[test]
fn display_shows_white_at_the_bottom() {
    let text = Position::new().apply_uci("e2e4").unwrap().to_string();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("8  r n b q k b n r"));
    assert!(text.contains("4  . . . . P . . ."));
    assert!(text.contains("Black to move, value "));
}
