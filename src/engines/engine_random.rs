//! Uniform random-move engine.
//!
//! Picks any legal move with equal probability. Seeded through `set_option`
//! so matches and tests are reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::board::Board;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> AtaxxResult<()> {
        if name.eq_ignore_ascii_case("Seed") {
            let seed = value
                .parse::<u64>()
                .map_err(|_| AtaxxError::InvalidCommand(format!("invalid Seed value '{value}'")))?;
            self.rng = StdRng::seed_from_u64(seed);
        }
        Ok(())
    }

    fn choose_move(&mut self, board: &Board, _params: &SearchParams) -> AtaxxResult<EngineOutput> {
        if board.is_game_over() {
            return Err(AtaxxError::GameOver);
        }

        let moves = board.moves_or_pass();
        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info random legal_moves {}", moves.len()));
        out.best_move = moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}
