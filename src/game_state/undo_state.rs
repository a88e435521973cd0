use crate::game_state::ataxx_types::{Color, SquareState};
use crate::game_state::grid::NUM_CELLS;
use crate::moves::ataxx_move::Move;

/// Immutable snapshot taken by `Board::make_move`, sufficient for
/// `Board::unmake_move` to restore the exact prior position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_cells: [SquareState; NUM_CELLS],
    pub prev_side_to_move: Color,
    pub prev_piece_counts: [u32; 2],
    pub prev_blocker_count: u32,
    pub prev_jumps_since_extend: u32,
    pub prev_last_non_pass_was_extend: bool,
    pub prev_move_count: u32,
    pub prev_non_pass_count: u32,
}
