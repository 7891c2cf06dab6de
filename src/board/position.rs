//! Immutable position snapshot.
//!
//! The side to move always looks "up" the board: its pieces are the
//! `Friendly` cells and its pawns advance toward lower indices. Making a move
//! produces a new position turned half a circle so the opponent takes over
//! the same orientation.

use std::fmt;

use super::types::{CastlingRights, Cell, Color, Move, Piece, Square, BOARD_CELLS, N, S};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A chess position seen from the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: [Cell; BOARD_CELLS],
    pub(crate) value: i32,
    pub(crate) side: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) king_passant: Option<Square>,
}

impl Position {
    /// The standard starting position, white to move.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty(Color::White, CastlingRights::all());
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            let home = Square::A1.offset(file as isize);
            let enemy_home = Square::A8.offset(file as isize);
            position.board[home.index()] = Cell::Friendly(piece);
            position.board[home.offset(N).index()] = Cell::Friendly(Piece::Pawn);
            position.board[enemy_home.index()] = Cell::Enemy(piece);
            position.board[enemy_home.offset(S).index()] = Cell::Enemy(Piece::Pawn);
        }
        position.with_static_value()
    }

    /// A position with an empty playable area and a zero value.
    pub(crate) fn empty(side: Color, castling: CastlingRights) -> Self {
        let mut board = [Cell::OffBoard; BOARD_CELLS];
        for (idx, cell) in board.iter_mut().enumerate() {
            if Square::new(idx).is_some_and(Square::is_playable) {
                *cell = Cell::Empty;
            }
        }
        Position {
            board,
            value: 0,
            side,
            castling,
            en_passant: None,
            king_passant: None,
        }
    }

    /// Contents of a frame square
    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        self.board[sq.index()]
    }

    /// Running evaluation from the point of view of the side to move
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Absolute color of the side to move
    #[inline]
    #[must_use]
    pub const fn side(&self) -> Color {
        self.side
    }

    #[inline]
    #[must_use]
    pub const fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Square a pawn skipped with a double step on the previous move
    #[inline]
    #[must_use]
    pub const fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Square the opponent's king passed while castling on the previous move
    #[inline]
    #[must_use]
    pub const fn king_passant(&self) -> Option<Square> {
        self.king_passant
    }

    /// The 120-character board: `' '` off-board, `'.'` empty, upper case for
    /// the side to move, lower case for the opponent.
    #[must_use]
    pub fn board_string(&self) -> String {
        self.board.iter().map(|cell| cell.to_char()).collect()
    }

    /// Hand the move to the opponent.
    ///
    /// The board is reversed end to end, ownership swaps and the value is
    /// negated. Passant squares are mirrored, or dropped when `null` is set
    /// (a pass rather than a real move).
    #[must_use]
    pub fn rotate(&self, null: bool) -> Position {
        let mut board = [Cell::OffBoard; BOARD_CELLS];
        for (idx, cell) in self.board.iter().enumerate() {
            board[BOARD_CELLS - 1 - idx] = cell.flip();
        }
        let mirror = |sq: Option<Square>| if null { None } else { sq.map(Square::rotate) };
        Position {
            board,
            value: -self.value,
            side: self.side.opponent(),
            castling: self.castling,
            en_passant: mirror(self.en_passant),
            king_passant: mirror(self.king_passant),
        }
    }

    /// Play a move generated for this position and return the resulting
    /// position, already rotated to the opponent.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Position {
        let (from, to) = (mv.from(), mv.to());
        let moving = self.cell(from);

        let mut next = Position {
            board: self.board,
            value: self.value + self.points(mv),
            side: self.side,
            castling: self.castling,
            en_passant: None,
            king_passant: None,
        };
        next.board[to.index()] = moving;
        next.board[from.index()] = Cell::Empty;

        if from == Square::A1 || from == Square::H1 {
            next.castling.remove_corner(from, self.side);
        }
        if to == Square::A8 || to == Square::H8 {
            next.castling.remove_corner(to, self.side);
        }

        match moving.friendly() {
            Some(Piece::King) => {
                next.castling.remove_color(self.side);
                if from.index().abs_diff(to.index()) == 2 {
                    let passed = Square::midpoint(from, to);
                    let corner = if to < from { Square::A1 } else { Square::H1 };
                    next.board[corner.index()] = Cell::Empty;
                    next.board[passed.index()] = Cell::Friendly(Piece::Rook);
                    next.king_passant = Some(passed);
                }
            }
            Some(Piece::Pawn) => {
                if to.is_back_rank() {
                    let promoted = mv.promotion().unwrap_or(Piece::Queen);
                    next.board[to.index()] = Cell::Friendly(promoted);
                }
                if to == from.offset(N + N) {
                    next.en_passant = Some(from.offset(N));
                }
                if Some(to) == self.en_passant {
                    next.board[to.offset(S).index()] = Cell::Empty;
                }
            }
            _ => {}
        }

        next.rotate(false)
    }

    /// Recompute `value` from scratch using the piece-square tables.
    pub(crate) fn with_static_value(mut self) -> Self {
        self.value = self.static_value();
        self
    }

    /// Frame square holding the friendly king, if any
    #[must_use]
    pub fn king_square(&self) -> Option<Square> {
        self.find(Cell::Friendly(Piece::King))
    }

    /// Absolute color and kind of the piece on an absolute (rank, file)
    #[must_use]
    pub fn piece_at(&self, rank: usize, file: usize) -> Option<(Color, Piece)> {
        let sq = Square::from_coords(rank, file, self.side).ok()?;
        match self.cell(sq) {
            Cell::Friendly(piece) => Some((self.side, piece)),
            Cell::Enemy(piece) => Some((self.side.opponent(), piece)),
            Cell::Empty | Cell::OffBoard => None,
        }
    }

    pub(crate) fn find(&self, target: Cell) -> Option<Square> {
        self.board
            .iter()
            .position(|&cell| cell == target)
            .and_then(Square::new)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Diagram from white's side of the board, white pieces in upper case.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = match self.piece_at(rank, file) {
                    Some((Color::White, piece)) => piece.to_char().to_ascii_uppercase(),
                    Some((Color::Black, piece)) => piece.to_char(),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move, value {}", self.side, self.value)
    }
}
