//! One-ply material-greedy engine.
//!
//! Plays whichever move leaves the mover with the largest piece lead right
//! away. Ties go to the first move in generation order, so play is
//! deterministic.

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::board::Board;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

#[derive(Debug, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, board: &Board, _params: &SearchParams) -> AtaxxResult<EngineOutput> {
        if board.is_game_over() {
            return Err(AtaxxError::GameOver);
        }

        let moves = board.moves_or_pass();
        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info greedy legal_moves {}", moves.len()));

        let mut working = board.detached();
        let mut best = None;
        let mut best_value = i32::MIN;
        for mv in moves {
            let undo = working.make_move_unchecked(mv);
            // Scored from the opponent's seat, so negate.
            let value = -MaterialScorer.score(&working);
            working.restore(&undo);

            if value > best_value {
                best_value = value;
                best = Some(mv);
            }
        }

        out.info_lines
            .push(format!("info greedy material {best_value}"));
        out.best_move = best;
        Ok(out)
    }
}
