//! A game between a player and the engine.
//!
//! `Game` owns the history of positions and the searcher. Moves from the
//! player are checked against the generated moves and rejected if they
//! leave the king attacked; engine moves come from an opening line first
//! and the search after that. Nothing is committed when an error is
//! returned.

mod error;
mod openings;

use std::sync::atomic::AtomicBool;

use log::{info, warn};

use crate::board::{Move, Piece, Position, Searcher, Square};
use crate::engine::{think, ThinkLimits, ThinkOutcome};

pub use error::GameError;
pub use openings::{OpeningBook, OpeningLine, DEFAULT_PLY_LIMIT};

/// Whether the side to move can still play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

#[derive(Debug)]
pub struct Game {
    history: Vec<Position>,
    searcher: Searcher,
    limits: ThinkLimits,
    opening: Option<OpeningLine>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A game from the starting position
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Position::new())
    }

    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Game {
            history: vec![position],
            searcher: Searcher::new(),
            limits: ThinkLimits::default(),
            opening: None,
        }
    }

    #[must_use]
    pub fn with_opening(mut self, line: OpeningLine) -> Self {
        self.opening = Some(line);
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: ThinkLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn set_limits(&mut self, limits: ThinkLimits) {
        self.limits = limits;
    }

    /// The current position
    #[must_use]
    pub fn position(&self) -> &Position {
        // history is never empty
        &self.history[self.history.len() - 1]
    }

    /// Every position of the game, current one last
    #[must_use]
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Generated moves that do not leave the mover's king attacked
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let position = self.position();
        position
            .moves()
            .filter(|&mv| !position.apply(mv).attacks_enemy_king())
            .collect()
    }

    /// Generated moves of the piece on `square` (in the mover's frame),
    /// including ones that would leave the king attacked
    #[must_use]
    pub fn moves_from(&self, square: Square) -> Vec<Move> {
        self.position().moves().filter(|mv| mv.from() == square).collect()
    }

    /// Play the move from `from` to `to`, promoting to a queen if a pawn
    /// reaches the last rank.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move, GameError> {
        let mv = self
            .position()
            .moves()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion().is_none_or(|p| p == Piece::Queen))
            .ok_or(GameError::IllegalMove { from, to })?;
        self.play_move(mv)?;
        Ok(mv)
    }

    /// Play a move given in coordinate notation
    pub fn play_uci(&mut self, text: &str) -> Result<Move, GameError> {
        let mv = self.position().parse_move(text)?;
        self.play_move(mv)?;
        Ok(mv)
    }

    /// Play a move in the current position's frame
    pub fn play_move(&mut self, mv: Move) -> Result<(), GameError> {
        let position = self.position();
        if !position.moves().any(|m| m == mv) {
            return Err(GameError::IllegalMove {
                from: mv.from(),
                to: mv.to(),
            });
        }
        let next = position.apply(mv);
        if next.attacks_enemy_king() {
            return Err(GameError::InCheck);
        }
        let side = position.side();
        if let Some(line) = &mut self.opening {
            line.observe(side, mv);
        }
        self.commit(mv, next);
        Ok(())
    }

    /// Let the engine pick and play a move.
    ///
    /// Returns the move in the frame of the position it was played from.
    pub fn engine_move(&mut self) -> Result<Move, GameError> {
        let legal = self.legal_moves();
        if legal.is_empty() {
            return Err(GameError::NoLegalMove);
        }
        if let Some(mv) = self.opening_move() {
            let next = self.position().apply(mv);
            self.commit(mv, next);
            return Ok(mv);
        }

        let outcome = self.think();
        let mv = pick_legal(self.position(), outcome.best_move, &legal).ok_or(GameError::NoLegalMove)?;
        let side = self.position().side();
        let next = self.position().apply(mv);
        if let Some(line) = &mut self.opening {
            line.observe(side, mv);
        }
        self.commit(mv, next);
        Ok(mv)
    }

    /// Search the current position without playing anything
    pub fn think(&mut self) -> ThinkOutcome {
        let stop = AtomicBool::new(false);
        think(&mut self.searcher, &self.history, &self.limits, &stop, |_| {})
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if !self.legal_moves().is_empty() {
            GameStatus::Ongoing
        } else if self.position().is_in_check(self.position().side()) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    fn opening_move(&mut self) -> Option<Move> {
        let line = self.opening.as_mut()?;
        if line.is_exhausted() {
            self.opening = None;
            return None;
        }
        let position = &self.history[self.history.len() - 1];
        let candidates: Vec<Move> = position
            .moves()
            .filter(|&mv| !position.apply(mv).attacks_enemy_king())
            .collect();
        line.next_for(position.side(), &candidates)
    }

    fn commit(&mut self, mv: Move, next: Position) {
        info!("{} plays {}", self.position().side(), mv.to_uci(self.position().side()));
        self.history.push(next);
    }
}

/// The searched move if it keeps the king, otherwise the legal move with
/// the most points.
fn pick_legal(position: &Position, searched: Option<Move>, legal: &[Move]) -> Option<Move> {
    if let Some(mv) = searched.filter(|mv| legal.contains(mv)) {
        return Some(mv);
    }
    if let Some(mv) = searched {
        warn!("search chose {} which leaves the king attacked", mv.to_uci(position.side()));
    }
    legal.iter().copied().max_by_key(|&mv| position.points(mv))
}
