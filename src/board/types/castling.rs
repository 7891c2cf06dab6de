//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Absolute castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    /// Right attached to a rook corner of the frame in which `side` is to move.
    ///
    /// The board is turned half a circle for black, so the corner on the
    /// h-file of the frame is black's queenside.
    #[must_use]
    pub fn corner_right(corner: Square, side: Color) -> Option<(Color, bool)> {
        let (owner_is_side, on_h_file) = match corner {
            Square::A1 => (true, false),
            Square::H1 => (true, true),
            Square::A8 => (false, false),
            Square::H8 => (false, true),
            _ => return None,
        };
        let owner = if owner_is_side { side } else { side.opponent() };
        let kingside = on_h_file ^ (side == Color::Black);
        Some((owner, kingside))
    }

    /// Whether the right attached to `corner` (in `side`'s frame) is set
    #[must_use]
    pub fn has_corner(self, corner: Square, side: Color) -> bool {
        Self::corner_right(corner, side).is_some_and(|(color, kingside)| self.has(color, kingside))
    }

    /// Clear the right attached to `corner` (in `side`'s frame), if any
    pub fn remove_corner(&mut self, corner: Square, side: Color) {
        if let Some((color, kingside)) = Self::corner_right(corner, side) {
            self.remove(color, kingside);
        }
    }

    /// Parse the FEN castling field (`KQkq`, `-`)
    #[must_use]
    pub fn from_fen(field: &str) -> Option<Self> {
        let mut rights = CastlingRights::none();
        if field == "-" {
            return Some(rights);
        }
        for c in field.chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                _ => return None,
            }
        }
        Some(rights)
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

/// FEN castling field
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.has(color, kingside) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_absolute_rights() {
        assert_eq!(CastlingRights::corner_right(Square::A1, Color::White), Some((Color::White, false)));
        assert_eq!(CastlingRights::corner_right(Square::H1, Color::White), Some((Color::White, true)));
        assert_eq!(CastlingRights::corner_right(Square::A8, Color::White), Some((Color::Black, false)));
        assert_eq!(CastlingRights::corner_right(Square::H8, Color::White), Some((Color::Black, true)));
        assert_eq!(CastlingRights::corner_right(Square::A1, Color::Black), Some((Color::Black, true)));
        assert_eq!(CastlingRights::corner_right(Square::H1, Color::Black), Some((Color::Black, false)));
        assert_eq!(CastlingRights::corner_right(Square::A8, Color::Black), Some((Color::White, true)));
        assert_eq!(CastlingRights::corner_right(Square::H8, Color::Black), Some((Color::White, false)));
        assert_eq!(CastlingRights::corner_right(Square::A1.offset(1), Color::White), None);
    }

    #[test]
    fn fen_field_roundtrip() {
        for field in ["KQkq", "Kq", "-", "k"] {
            let rights = CastlingRights::from_fen(field).expect("valid field");
            assert_eq!(rights.to_string(), field);
        }
        assert!(CastlingRights::from_fen("KX").is_none());
    }
}
