//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --games 20 --depth 3`
//!
//! Per-game results are logged at `info`; set `ATAXX_LOG=info` to see them.

use ataxx_engine::engines::engine_greedy::GreedyEngine;
use ataxx_engine::engines::engine_minimax::MinimaxEngine;
use ataxx_engine::engines::engine_trait::{Engine, SearchParams};
use ataxx_engine::errors::{AtaxxError, AtaxxResult};
use ataxx_engine::logging::init_logging;
use ataxx_engine::utils::match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn arg_value<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> AtaxxResult<T> {
    match args.iter().position(|a| a == flag) {
        None => Ok(default),
        Some(i) => args
            .get(i + 1)
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| AtaxxError::InvalidCommand(format!("{flag} needs a number"))),
    }
}

fn main() -> AtaxxResult<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    let games: u16 = arg_value(&args, "--games", 10)?;
    let depth: u8 = arg_value(&args, "--depth", 3)?;
    let seed: u64 = arg_value(&args, "--seed", 1234)?;

    // Swap these to compare other engines or depths.
    let player1 = || Box::new(MinimaxEngine::new(depth)) as Box<dyn Engine>;
    let player2 = || Box::new(GreedyEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games,
            base_seed: seed,
            per_game: MatchConfig {
                opening_min_plies: 0,
                opening_max_plies: 4,
                params: SearchParams { depth: Some(depth) },
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
