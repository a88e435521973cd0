//! Move-tree node counting for validating move generation.

use crate::game_state::board::Board;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub extends: u64,
    pub jumps: u64,
    pub passes: u64,
    /// Leaves reached early because the game ended.
    pub game_overs: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.extends += rhs.extends;
        self.jumps += rhs.jumps;
        self.passes += rhs.passes;
        self.game_overs += rhs.game_overs;
    }
}

/// Count positions `depth` plies below `board`. Finished games count as one
/// leaf; a side with no move contributes a single pass.
pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    let mut working = board.detached();
    let mut counts = PerftCounts::default();
    perft_recurse(&mut working, depth, &mut counts);
    counts
}

/// Per-root-move breakdown, in generation order.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut working = board.detached();
    let mut out = Vec::new();
    for mv in working.moves_or_pass() {
        let undo = working.make_move_unchecked(mv);
        let mut counts = PerftCounts::default();
        perft_recurse(&mut working, depth - 1, &mut counts);
        working.restore(&undo);
        out.push((mv.to_string(), counts.nodes));
    }
    out
}

fn perft_recurse(board: &mut Board, depth: u8, counts: &mut PerftCounts) {
    if depth == 0 {
        counts.nodes += 1;
        return;
    }
    if board.is_game_over() {
        counts.nodes += 1;
        counts.game_overs += 1;
        return;
    }

    let mut local = PerftCounts::default();
    for mv in board.moves_or_pass() {
        if depth == 1 {
            if mv.is_pass() {
                local.passes += 1;
            } else if mv.is_extend() {
                local.extends += 1;
            } else {
                local.jumps += 1;
            }
        }
        let undo = board.make_move_unchecked(mv);
        perft_recurse(board, depth - 1, &mut local);
        board.restore(&undo);
    }
    counts.merge(local);
}
