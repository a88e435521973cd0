//! The two kinds of participant in a game.
//!
//! A computer player asks its engine for a move; a manual player's move
//! arrives later through the command surface, so asking it for a turn just
//! yields `Turn::AwaitInput`.

use tracing::debug;

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::board::Board;
use crate::moves::ataxx_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Move(Move),
    AwaitInput,
}

pub enum Player {
    Computer(Box<dyn Engine>),
    Manual,
}

impl Player {
    /// Computer player running the default alpha-beta engine.
    pub fn computer() -> Self {
        Self::Computer(Box::new(MinimaxEngine::default()))
    }

    pub fn with_engine(engine: Box<dyn Engine>) -> Self {
        Self::Computer(engine)
    }

    /// Computer player by engine name: `minimax`, `mobility`, `greedy` or
    /// `random`.
    pub fn from_engine_name(name: &str, depth: u8, seed: Option<u64>) -> AtaxxResult<Self> {
        let engine: Box<dyn Engine> = match name.to_ascii_lowercase().as_str() {
            "minimax" | "ai" => Box::new(MinimaxEngine::new(depth)),
            "mobility" => Box::new(MinimaxEngine::new_mobility(depth)),
            "greedy" => Box::new(GreedyEngine::new()),
            "random" => match seed {
                Some(seed) => Box::new(RandomEngine::with_seed(seed)),
                None => Box::new(RandomEngine::new()),
            },
            other => {
                return Err(AtaxxError::InvalidCommand(format!("unknown engine '{other}'")))
            }
        };
        Ok(Self::Computer(engine))
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, Self::Manual)
    }

    pub fn describe(&self) -> &str {
        match self {
            Self::Computer(engine) => engine.name(),
            Self::Manual => "manual",
        }
    }

    /// Produce the next move for the side to move of `board`.
    ///
    /// `info` collects the engine's diagnostic lines.
    pub fn take_turn(
        &mut self,
        board: &Board,
        params: &SearchParams,
        info: &mut Vec<String>,
    ) -> AtaxxResult<Turn> {
        match self {
            Self::Manual => Ok(Turn::AwaitInput),
            Self::Computer(engine) => {
                let out = engine.choose_move(board, params)?;
                info.extend(out.info_lines);
                let mv = out.best_move.ok_or(AtaxxError::GameOver)?;
                debug!(engine = engine.name(), %mv, "engine chose");
                Ok(Turn::Move(mv))
            }
        }
    }

    pub fn new_game(&mut self) {
        if let Self::Computer(engine) = self {
            engine.new_game();
        }
    }

    /// Forward an engine option; manual players ignore options.
    pub fn set_option(&mut self, name: &str, value: &str) -> AtaxxResult<()> {
        match self {
            Self::Computer(engine) => engine.set_option(name, value),
            Self::Manual => Ok(()),
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Computer(engine) => f.debug_tuple("Computer").field(&engine.name()).finish(),
            Self::Manual => f.write_str("Manual"),
        }
    }
}
