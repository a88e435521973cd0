//! Computer player engine backed by the alpha-beta search.

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::board::Board;
use crate::search::alpha_beta::{search_best_move, SearchConfig};
use crate::search::board_scoring::{BoardScorer, MaterialScorer, MobilityScorer};

pub struct MinimaxEngine<S: BoardScorer> {
    scorer: S,
    config: SearchConfig,
}

impl MinimaxEngine<MaterialScorer> {
    pub fn new(max_depth: u8) -> Self {
        Self::with_scorer(MaterialScorer, max_depth)
    }
}

impl MinimaxEngine<MobilityScorer> {
    pub fn new_mobility(max_depth: u8) -> Self {
        Self::with_scorer(MobilityScorer, max_depth)
    }
}

impl Default for MinimaxEngine<MaterialScorer> {
    fn default() -> Self {
        Self::with_scorer(MaterialScorer, SearchConfig::default().max_depth)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S, max_depth: u8) -> Self {
        Self {
            scorer,
            config: SearchConfig { max_depth },
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.config.max_depth
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> AtaxxResult<()> {
        if name.eq_ignore_ascii_case("Depth") {
            let depth = value
                .parse::<u8>()
                .map_err(|_| AtaxxError::InvalidCommand(format!("invalid Depth value '{value}'")))?;
            self.config.max_depth = depth.max(1);
        }
        Ok(())
    }

    fn choose_move(&mut self, board: &Board, params: &SearchParams) -> AtaxxResult<EngineOutput> {
        let mut config = self.config;
        if let Some(depth) = params.depth {
            config.max_depth = depth;
        }

        let result = search_best_move(board, &self.scorer, config)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info minimax depth {} nodes {} score {}",
            result.depth, result.nodes, result.best_score
        ));
        out.best_move = Some(result.best_move);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, SearchParams};
    use crate::game_state::board::Board;

    #[test]
    fn chooses_a_legal_move_without_mutating_the_board() {
        let board = Board::new();
        let before = board.clone();
        let mut engine = MinimaxEngine::new(3);
        let out = engine
            .choose_move(&board, &SearchParams::default())
            .expect("engine should choose");
        let mv = out.best_move.expect("a move should be chosen");
        assert!(board.is_legal(mv));
        assert_eq!(board, before);
        assert_eq!(out.info_lines.len(), 1);
    }

    #[test]
    fn depth_option_parses_and_rejects_garbage() {
        let mut engine = MinimaxEngine::new(4);
        engine.set_option("Depth", "2").expect("depth should parse");
        assert_eq!(engine.max_depth(), 2);
        assert!(engine.set_option("depth", "deep").is_err());
        engine.set_option("Seed", "7").expect("unknown options are ignored");
    }

    #[test]
    fn mobility_variant_also_plays() {
        let board = Board::new();
        let mut engine = MinimaxEngine::new_mobility(2);
        let out = engine
            .choose_move(&board, &SearchParams { depth: Some(1) })
            .expect("engine should choose");
        assert!(board.is_legal(out.best_move.expect("move")));
    }
}
