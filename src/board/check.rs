//! Check detection by king capture.
//!
//! A side is in check when the opponent, given the move, could land on its
//! king. Pins and legality beyond that are not considered.

use super::position::Position;
use super::types::{Cell, Color, Piece};

impl Position {
    /// Returns true if some pseudo-legal move of the side to move ends on
    /// the opponent's king.
    #[must_use]
    pub fn attacks_enemy_king(&self) -> bool {
        let king = Cell::Enemy(Piece::King);
        self.moves().any(|mv| self.cell(mv.to()) == king)
    }

    /// Returns true if `color`'s king is attacked in this position.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        in_check(self, color)
    }
}

/// Returns true if `color`'s king is attacked, whichever side is to move.
#[must_use]
pub fn in_check(position: &Position, color: Color) -> bool {
    if position.side() == color {
        position.rotate(true).attacks_enemy_king()
    } else {
        position.attacks_enemy_king()
    }
}
