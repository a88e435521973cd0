//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer` so alternate heuristics
//! can be swapped in without touching the tree walk.

use crate::game_state::board::Board;
use crate::game_state::grid::NUM_PLAYABLE;

/// Magnitude of a decided game. Exceeds any material difference.
pub const WINNING_VALUE: i32 = 10_000;

const _: () = assert!(WINNING_VALUE - u8::MAX as i32 > NUM_PLAYABLE as i32);

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, board: &Board) -> i32;
}

/// Mover's piece count minus the opponent's.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    #[inline]
    fn score(&self, board: &Board) -> i32 {
        let mover = board.side_to_move();
        board.num_pieces(mover) as i32 - board.num_pieces(mover.opposite()) as i32
    }
}

/// Material plus a small bonus for the number of moves available, which
/// steers away from positions where the mover is about to be boxed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobilityScorer;

impl BoardScorer for MobilityScorer {
    fn score(&self, board: &Board) -> i32 {
        let mover = board.side_to_move();
        let material = MaterialScorer.score(board) * 8;
        let mobility = board.legal_moves(mover).len() as i32
            - board.legal_moves(mover.opposite()).len() as i32;
        material + mobility.signum() * mobility.abs().min(7)
    }
}

/// Score of a finished game for the side to move, `ply` plies from the root.
/// Quicker wins and slower losses score better.
pub fn terminal_score(board: &Board, ply: u8) -> i32 {
    match MaterialScorer.score(board).signum() {
        1 => WINNING_VALUE - i32::from(ply),
        -1 => -WINNING_VALUE + i32::from(ply),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{terminal_score, BoardScorer, MaterialScorer, WINNING_VALUE};
    use crate::game_state::ataxx_types::Color;
    use crate::game_state::board::Board;
    use crate::utils::algebraic::parse_square;

    #[test]
    fn material_is_relative_to_side_to_move() {
        let mut board = Board::new();
        assert_eq!(MaterialScorer.score(&board), 0);
        board.make_move("a7-b7".parse().expect("move")).expect("legal");
        // Blue to move, one piece down.
        assert_eq!(MaterialScorer.score(&board), -1);
    }

    #[test]
    fn terminal_scores_dominate_material() {
        let mut board = Board::new();
        board
            .set_piece(parse_square("a7").expect("a7"), None)
            .expect("editable");
        board
            .set_piece(parse_square("g1").expect("g1"), None)
            .expect("editable");
        // Red to move with no pieces.
        assert_eq!(terminal_score(&board, 0), -WINNING_VALUE);
        board.set_side_to_move(Color::Blue);
        assert_eq!(terminal_score(&board, 3), WINNING_VALUE - 3);
    }
}
