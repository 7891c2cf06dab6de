pub mod board;
pub mod engine;
pub mod game;
pub mod tt;
pub mod uci;

pub use board::{Color, Move, Piece, Position, Searcher, Square};
pub use game::{Game, GameError, GameStatus};
pub use tt::TranspositionTable;
