//! Legal move enumeration.
//!
//! Order is deterministic: source squares in row-major order (`a1`..`g7`),
//! then destinations in neighborhood order (rows ascending, columns ascending
//! within a row). Search tie-breaks rely on this order.

use crate::game_state::ataxx_types::{Color, SquareState};
use crate::game_state::board::Board;
use crate::game_state::grid;
use crate::moves::ataxx_move::Move;

/// Upper bound on moves from one square.
const MAX_MOVES_PER_SQUARE: usize = 24;

impl Board {
    /// Every non-pass move `color` could make if it were on move. For the side
    /// to move these are exactly the moves accepted by `is_legal`.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.num_pieces(color) as usize * MAX_MOVES_PER_SQUARE);
        self.legal_moves_into(color, &mut moves);
        moves
    }

    /// Appends `color`'s moves to `moves` without clearing it.
    pub fn legal_moves_into(&self, color: Color, moves: &mut Vec<Move>) {
        let own = SquareState::from(color);
        for from in grid::playable_squares() {
            if self.cells[from] != own {
                continue;
            }
            for (dc, dr) in grid::neighborhood(2) {
                let to = grid::neighbor(from, dc, dr);
                if self.cells[to].is_empty() {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }

    /// Legal moves for the side to move, or a lone pass if there are none.
    pub fn moves_or_pass(&self) -> Vec<Move> {
        let moves = self.legal_moves(self.side_to_move);
        if moves.is_empty() {
            vec![Move::Pass]
        } else {
            moves
        }
    }
}
