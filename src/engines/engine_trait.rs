//! Engine abstraction used by computer players and the match harness.
//!
//! Defines common request parameters and output payloads so different move
//! choosers can be selected at runtime behind a single trait interface.

use crate::errors::AtaxxResult;
use crate::game_state::board::Board;
use crate::moves::ataxx_move::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams {
    /// Overrides the engine's configured depth for this request.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` only when the position is finished.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Engine-specific runtime option (`Depth`, `Seed`). Unknown names are
    /// ignored.
    fn set_option(&mut self, _name: &str, _value: &str) -> AtaxxResult<()> {
        Ok(())
    }

    /// Pick a move for the side to move of `board`. The board is not modified.
    fn choose_move(&mut self, board: &Board, params: &SearchParams) -> AtaxxResult<EngineOutput>;
}
