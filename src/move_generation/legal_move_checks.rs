//! Legality and end-of-game queries.

use crate::game_state::ataxx_types::{Color, SquareState};
use crate::game_state::board::Board;
use crate::game_state::grid::{self, NUM_PLAYABLE};
use crate::moves::ataxx_move::{Move, MoveKind};

impl Board {
    /// True iff `mv` may be played by the side to move.
    ///
    /// A pass is legal only when the side to move has no other move. A step
    /// needs a playable source holding the mover's piece, an empty playable
    /// destination and a Chebyshev distance of 1 or 2.
    pub fn is_legal(&self, mv: Move) -> bool {
        match mv {
            Move::Pass => !self.can_move(self.side_to_move),
            Move::Step { from, to } => {
                if !grid::is_playable(from) || !grid::is_playable(to) {
                    return false;
                }
                if !matches!(mv.kind(), MoveKind::Extend | MoveKind::Jump) {
                    return false;
                }
                self.cells[from] == SquareState::from(self.side_to_move)
                    && self.cells[to].is_empty()
            }
        }
    }

    /// True iff `color` has at least one non-pass move, whoever is on move.
    pub fn can_move(&self, color: Color) -> bool {
        let own = SquareState::from(color);
        grid::playable_squares()
            .filter(|&sq| self.cells[sq] == own)
            .any(|sq| {
                grid::neighborhood(2).any(|(dc, dr)| self.cells[grid::neighbor(sq, dc, dr)].is_empty())
            })
    }

    /// True iff a side is wiped out, the board is full, the jump limit is
    /// reached, or neither side can move.
    pub fn is_game_over(&self) -> bool {
        let red = self.num_pieces(Color::Red);
        let blue = self.num_pieces(Color::Blue);
        if red == 0 || blue == 0 {
            return true;
        }
        if (red + blue + self.blocker_count) as usize >= NUM_PLAYABLE {
            return true;
        }
        if self.jumps_since_extend >= self.rules.jump_limit {
            return true;
        }
        !self.can_move(self.side_to_move) && !self.can_move(self.side_to_move.opposite())
    }

    /// Winner by piece count once the game is over; `None` on a tie.
    pub fn leader(&self) -> Option<Color> {
        let red = self.num_pieces(Color::Red);
        let blue = self.num_pieces(Color::Blue);
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Some(Color::Red),
            std::cmp::Ordering::Less => Some(Color::Blue),
            std::cmp::Ordering::Equal => None,
        }
    }
}
