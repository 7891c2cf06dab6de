//! Pseudo-legal move generation on the padded board.
//!
//! Moves are produced lazily, one origin square at a time. Each piece walks
//! its direction offsets until it runs into a sentinel cell or one of its
//! own pieces; the border means no walk ever needs a bounds check. Moves
//! that leave the king attacked are still generated; the search sees them
//! through the king-capture score instead.

use super::position::Position;
use super::types::{Cell, Move, Piece, Square, BOARD_CELLS, E, N, PROMOTION_PIECES, W};

/// Lazy iterator over the pseudo-legal moves of a position.
///
/// Order: board index of the origin, then direction order, then distance
/// along the ray.
pub struct MoveGen<'a> {
    position: &'a Position,
    next_square: usize,
    pending: Vec<Move>,
    cursor: usize,
}

impl<'a> MoveGen<'a> {
    pub(crate) fn new(position: &'a Position) -> Self {
        MoveGen {
            position,
            next_square: 0,
            pending: Vec::with_capacity(28),
            cursor: 0,
        }
    }

    /// Refill `pending` with the moves of the next friendly piece.
    /// Returns false once the board is exhausted.
    fn refill(&mut self) -> bool {
        while self.next_square < BOARD_CELLS {
            let idx = self.next_square;
            self.next_square += 1;
            let Some(from) = Square::new(idx) else {
                break;
            };
            if let Cell::Friendly(piece) = self.position.cell(from) {
                self.pending.clear();
                self.cursor = 0;
                piece_moves(self.position, from, piece, &mut self.pending);
                if !self.pending.is_empty() {
                    return true;
                }
            }
        }
        false
    }
}

impl Iterator for MoveGen<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            if let Some(&mv) = self.pending.get(self.cursor) {
                self.cursor += 1;
                return Some(mv);
            }
            if !self.refill() {
                return None;
            }
        }
    }
}

fn piece_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for &dir in piece.directions() {
        let mut to = from;
        loop {
            to = to.offset(dir);
            let target = position.cell(to);
            if matches!(target, Cell::OffBoard | Cell::Friendly(_)) {
                break;
            }

            if piece == Piece::Pawn {
                if (dir == N || dir == N + N) && !target.is_empty() {
                    break;
                }
                if dir == N + N
                    && (from.index() < Square::A1.index() - 10 || !position.cell(from.offset(N)).is_empty())
                {
                    break;
                }
                if (dir == N + W || dir == N + E) && target.is_empty() && !position.pawn_may_take(to) {
                    break;
                }
                if to.is_back_rank() {
                    out.extend(PROMOTION_PIECES.iter().map(|&p| Move::with_promotion(from, to, p)));
                    break;
                }
            }

            out.push(Move::new(from, to));

            if !piece.is_slider() || target.enemy().is_some() {
                break;
            }

            if piece == Piece::Rook {
                castle_moves(position, from, to, out);
            }
        }
    }
}

/// While a corner rook slides toward its king, the step next to the king
/// stands in for the castling move.
fn castle_moves(position: &Position, rook_from: Square, step: Square, out: &mut Vec<Move>) {
    let king = Cell::Friendly(Piece::King);
    let side = position.side();
    if rook_from == Square::A1
        && position.cell(step.offset(E)) == king
        && position.castling().has_corner(Square::A1, side)
    {
        out.push(Move::new(step.offset(E), step.offset(W)));
    }
    if rook_from == Square::H1
        && position.cell(step.offset(W)) == king
        && position.castling().has_corner(Square::H1, side)
    {
        out.push(Move::new(step.offset(W), step.offset(E)));
    }
}

impl Position {
    /// Pseudo-legal moves of the side to move.
    ///
    /// Each call starts a fresh generator.
    #[must_use]
    pub fn moves(&self) -> MoveGen<'_> {
        MoveGen::new(self)
    }

    /// An empty diagonal square a pawn may still capture on: the en passant
    /// square, or the square a castling king crossed and its neighbours.
    fn pawn_may_take(&self, to: Square) -> bool {
        if Some(to) == self.en_passant {
            return true;
        }
        self.king_passant
            .is_some_and(|kp| to.index().abs_diff(kp.index()) < 2)
    }
}
