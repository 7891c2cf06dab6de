//! Move scoring.

use super::position::Position;
use super::pst::pst;
use super::types::{Cell, Move, Piece, Square, S};

impl Position {
    /// Change in `value` caused by playing `mv`, from the mover's side.
    ///
    /// Only meaningful for moves produced by [`Position::moves`]; a move that
    /// does not start on a friendly piece scores zero.
    #[must_use]
    pub fn points(&self, mv: Move) -> i32 {
        let (from, to) = (mv.from(), mv.to());
        let Some(piece) = self.cell(from).friendly() else {
            return 0;
        };

        let mut score = pst(piece, to) - pst(piece, from);

        if let Some(captured) = self.cell(to).enemy() {
            score += captured.value();
        }

        // Landing on or beside the square a castling king crossed takes the king.
        if let Some(kp) = self.king_passant {
            if to.index().abs_diff(kp.index()) < 2 {
                score += pst(Piece::King, to.rotate());
            }
        }

        match piece {
            Piece::King if from.index().abs_diff(to.index()) == 2 => {
                let corner = if to < from { Square::A1 } else { Square::H1 };
                score += pst(Piece::Rook, Square::midpoint(from, to));
                score -= pst(Piece::Rook, corner);
            }
            Piece::Pawn => {
                if to.is_back_rank() {
                    let promoted = mv.promotion().unwrap_or(Piece::Queen);
                    score += pst(promoted, to) - pst(Piece::Pawn, to);
                }
                if Some(to) == self.en_passant {
                    score += pst(Piece::Pawn, to.offset(S).rotate());
                }
            }
            _ => {}
        }

        score
    }

    /// Sum of friendly table scores minus the opponent's, each read from
    /// its owner's point of view.
    #[must_use]
    pub fn static_value(&self) -> i32 {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| Some((Square::new(idx)?, *cell)))
            .map(|(sq, cell)| match cell {
                Cell::Friendly(piece) => pst(piece, sq),
                Cell::Enemy(piece) => -pst(piece, sq.rotate()),
                Cell::Empty | Cell::OffBoard => 0,
            })
            .sum()
    }
}
