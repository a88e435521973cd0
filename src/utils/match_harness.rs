//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without the text
//! front end, with an optional seeded random opening prefix.

use std::time::Instant;

use chrono::{DateTime, Local};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, SearchParams};
use crate::errors::{AtaxxError, AtaxxResult};
use crate::game::reporter::Outcome;
use crate::game_state::ataxx_rules::RulesConfig;
use crate::game_state::ataxx_types::Color;
use crate::game_state::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Finished(Outcome),
    /// Stopped by the ply cap before the game ended.
    MaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    Draw,
    MaxPlies,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub params: SearchParams,
    pub rules: RulesConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 1000,
            opening_min_plies: 0,
            opening_max_plies: 4,
            params: SearchParams::default(),
            rules: RulesConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub started_at: DateTime<Local>,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub red_move_count: u32,
    pub blue_move_count: u32,
    pub red_total_time_ns: u128,
    pub blue_total_time_ns: u128,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub started_at: Option<DateTime<Local>>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let started = self
            .started_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_owned());
        format!(
            "started={} games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            started,
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
        )
    }
}

/// Play one seeded match from the starting position. `red` moves first.
pub fn play_engine_match(
    red: &mut dyn Engine,
    blue: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
) -> AtaxxResult<MatchResult> {
    let start = Board::with_rules(config.rules);
    play_match_internal(start, red, blue, seed, config, true)
}

/// Play one match from a caller-built position, without a random opening.
pub fn play_engine_match_from_board(
    start: Board,
    red: &mut dyn Engine,
    blue: &mut dyn Engine,
    config: MatchConfig,
) -> AtaxxResult<MatchResult> {
    play_match_internal(start, red, blue, 0, config, false)
}

fn play_match_internal(
    start: Board,
    red: &mut dyn Engine,
    blue: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
    random_opening: bool,
) -> AtaxxResult<MatchResult> {
    red.new_game();
    blue.new_game();

    let started_at = Local::now();
    let mut board = start.detached();
    let opening_moves = if random_opening {
        apply_seeded_random_opening(
            &mut board,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        )
    } else {
        Vec::new()
    };

    let mut result = MatchResult {
        outcome: MatchOutcome::MaxPlies,
        final_board: board.clone(),
        started_at,
        opening_moves,
        played_moves: Vec::new(),
        red_move_count: 0,
        blue_move_count: 0,
        red_total_time_ns: 0,
        blue_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if board.is_game_over() {
            result.outcome = MatchOutcome::Finished(Outcome::from_board(&board));
            break;
        }

        let mover = board.side_to_move();
        let engine: &mut dyn Engine = match mover {
            Color::Red => &mut *red,
            Color::Blue => &mut *blue,
        };
        let timer = Instant::now();
        let out = engine.choose_move(&board, &config.params)?;
        let elapsed_ns = timer.elapsed().as_nanos();

        match mover {
            Color::Red => {
                result.red_move_count = result.red_move_count.saturating_add(1);
                result.red_total_time_ns = result.red_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Blue => {
                result.blue_move_count = result.blue_move_count.saturating_add(1);
                result.blue_total_time_ns = result.blue_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.ok_or(AtaxxError::GameOver)?;
        board.make_move(chosen)?;
        result.played_moves.push(chosen.to_string());
    }

    if board.is_game_over() {
        result.outcome = MatchOutcome::Finished(Outcome::from_board(&board));
    }
    debug!(
        outcome = ?result.outcome,
        plies = result.played_moves.len(),
        "match finished"
    );
    result.final_board = board;
    Ok(result)
}

/// Play a series and aggregate win/loss/draw statistics.
///
/// Colors are drawn per game from `base_seed`, so a series is reproducible.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> AtaxxResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        started_at: Some(Local::now()),
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_red = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let result = if player1_is_red {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, config.per_game)?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_red {
            (
                result.red_move_count,
                result.blue_move_count,
                result.red_total_time_ns,
                result.blue_total_time_ns,
            )
        } else {
            (
                result.blue_move_count,
                result.red_move_count,
                result.blue_total_time_ns,
                result.red_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            MatchOutcome::Finished(outcome) => match outcome.winner() {
                Some(color) => {
                    let player1_won = (color == Color::Red) == player1_is_red;
                    let player = if player1_won {
                        stats.player1_wins += 1;
                        PlayerId::Player1
                    } else {
                        stats.player2_wins += 1;
                        PlayerId::Player2
                    };
                    SeriesOutcome::PlayerWin { player, color }
                }
                None => {
                    stats.draws += 1;
                    SeriesOutcome::Draw
                }
            },
            MatchOutcome::MaxPlies => {
                stats.draws += 1;
                SeriesOutcome::MaxPlies
            }
        };
        info!(
            game = i + 1,
            games = config.games,
            seed,
            player1_is_red,
            result = ?mapped,
            "series game finished"
        );
        stats.outcomes.push(mapped);
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);
    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    board: &mut Board,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    let mut opening = Vec::new();
    for _ in 0..target_plies {
        if board.is_game_over() {
            break;
        }
        let moves = board.moves_or_pass();
        let chosen = moves[rng.random_range(0..moves.len())];
        board.make_move_unchecked(chosen);
        opening.push(chosen.to_string());
    }
    opening
}
