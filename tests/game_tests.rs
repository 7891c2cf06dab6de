//! Playing through the `Game` boundary.

use negamax_chess::board::{Color, Piece, Position, Square};
use negamax_chess::engine::ThinkLimits;
use negamax_chess::game::{Game, GameError, GameStatus, OpeningLine};

fn game(fen: &str) -> Game {
    let position = Position::from_fen(fen).expect("valid fen");
    Game::from_position(position).with_limits(ThinkLimits::infinite().with_depth(3))
}

fn square(name: &str, side: Color) -> Square {
    Square::from_algebraic(name, side).unwrap()
}

#[test]
fn pinned_piece_cannot_move() {
    let mut game = game("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
    let before = game.position().clone();
    let err = game
        .play(square("e2", Color::White), square("d3", Color::White))
        .unwrap_err();
    assert_eq!(err, GameError::InCheck);
    assert_eq!(game.position(), &before);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn illegal_move_is_rejected() {
    let mut game = Game::new();
    assert!(matches!(game.play_uci("e2e5"), Err(GameError::Notation(_))));
    let err = game
        .play(square("e2", Color::White), square("e5", Color::White))
        .unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { .. }));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn legal_moves_filter_self_check() {
    let game = game("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
    let e2 = square("e2", Color::White);
    assert!(!game.moves_from(e2).is_empty());
    assert!(game.legal_moves().iter().all(|mv| mv.from() != e2));
}

#[test]
fn checkmate_has_no_engine_move() {
    let mut game = game("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1");
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert_eq!(game.engine_move(), Err(GameError::NoLegalMove));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn stalemate_has_no_engine_move() {
    let mut game = game("k7/8/1QK5/8/8/8/8/8 b - - 0 1");
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert_eq!(game.engine_move(), Err(GameError::NoLegalMove));
}

#[test]
fn engine_replies_to_player() {
    let mut game = Game::new().with_limits(ThinkLimits::infinite().with_depth(3));
    game.play_uci("e2e4").unwrap();
    let reply = game.engine_move().unwrap();
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.position().side(), Color::White);
    let before = &game.history()[1];
    assert!(before.parse_move(&reply.to_uci(Color::Black)).is_ok());
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn engine_promotes_to_queen() {
    let mut game = game("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let outcome = game.think();
    let best = outcome.best_move.expect("a move");
    assert_eq!(best.to_uci(Color::White), "e7e8q");
    assert!(outcome.score > 700, "score {}", outcome.score);

    game.engine_move().unwrap();
    assert_eq!(game.position().piece_at(7, 4), Some((Color::White, Piece::Queen)));
}

#[test]
fn engine_follows_opening_line_as_black() {
    let line = OpeningLine::from_uci("e2e4 e7e5 g1f3 b8c6").unwrap();
    let mut game = Game::new()
        .with_limits(ThinkLimits::infinite().with_depth(2))
        .with_opening(line);
    game.play_uci("e2e4").unwrap();
    let reply = game.engine_move().unwrap();
    assert_eq!(reply.to_uci(Color::Black), "e7e5");
    game.play_uci("g1f3").unwrap();
    let reply = game.engine_move().unwrap();
    assert_eq!(reply.to_uci(Color::Black), "b8c6");
}
