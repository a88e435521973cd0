//! Crate root module declarations for the Ataxx engine project.
//!
//! This file exposes all top-level subsystems (board state, move generation,
//! search, engines, players, the game session, the text front end and
//! utility helpers) so binaries, tests, and external tooling can import
//! stable module paths.

pub mod errors;
pub mod logging;

pub mod game_state {
    pub mod ataxx_rules;
    pub mod ataxx_types;
    pub mod board;
    pub mod grid;
    pub mod undo_state;
}

pub mod moves {
    pub mod ataxx_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod players {
    pub mod player;
}

pub mod game {
    pub mod reporter;
    pub mod session;
}

pub mod text {
    pub mod commands;
    pub mod console;
}

pub mod utils {
    pub mod algebraic;
    pub mod match_harness;
    pub mod render_board;
}
