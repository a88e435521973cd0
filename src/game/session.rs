//! A game session: board, players, undo history and the turn loop.
//!
//! The session moves through `Setup`, `Playing` and `Finished`. During setup
//! the position may be edited freely (blockers, moves, player choice); `start`
//! hands control to the players. Computer turns are played immediately, and the
//! loop stops whenever a manual player is on move or the game ends.

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::SearchParams;
use crate::errors::{AtaxxError, AtaxxResult};
use crate::game::reporter::{Outcome, Reporter};
use crate::game_state::ataxx_rules::RulesConfig;
use crate::game_state::ataxx_types::Color;
use crate::game_state::board::Board;
use crate::game_state::grid::Square;
use crate::game_state::undo_state::UndoState;
use crate::moves::ataxx_move::Move;
use crate::players::player::{Player, Turn};
use crate::search::alpha_beta::SearchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Setup,
    Playing,
    Finished,
}

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub rules: RulesConfig,
    pub search_depth: u8,
    /// Forward engine info lines to the reporter.
    pub verbose: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            search_depth: SearchConfig::default().max_depth,
            verbose: false,
        }
    }
}

pub struct Game<R: Reporter> {
    board: Board,
    history: Vec<UndoState>,
    players: [Player; 2],
    state: SessionState,
    config: SessionConfig,
    seed: Option<u64>,
    started_at: Option<DateTime<Local>>,
    reporter: R,
}

impl<R: Reporter> Game<R> {
    /// New session in setup, Red manual and Blue played by the computer.
    pub fn new(reporter: R) -> Self {
        Self::with_config(reporter, SessionConfig::default())
    }

    pub fn with_config(reporter: R, config: SessionConfig) -> Self {
        Self::with_board(Board::with_rules(config.rules), reporter, config)
    }

    /// Session around a caller-built board, e.g. one with an event channel.
    pub fn with_board(board: Board, reporter: R, config: SessionConfig) -> Self {
        let blue = Player::Computer(Box::new(MinimaxEngine::new(config.search_depth)));
        Self {
            board,
            history: Vec::new(),
            players: [Player::Manual, blue],
            state: SessionState::Setup,
            config,
            seed: None,
            started_at: None,
            reporter,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Leave setup and let the players move.
    pub fn start(&mut self) -> AtaxxResult<()> {
        self.require_state("start", &[SessionState::Setup])?;
        self.state = SessionState::Playing;
        let now = Local::now();
        self.started_at = Some(now);
        for player in &mut self.players {
            player.new_game();
        }
        info!(
            red = self.players[0].describe(),
            blue = self.players[1].describe(),
            started_at = %now.to_rfc3339(),
            "game started"
        );
        self.play_until_input()
    }

    /// Apply a move entered by the user for the side to move.
    ///
    /// In setup the move just edits the position. While playing it must come
    /// from a manual player, and computer replies follow immediately.
    pub fn submit_move(&mut self, mv: Move) -> AtaxxResult<()> {
        match self.state {
            SessionState::Finished => {
                return Err(AtaxxError::CommandNotAllowed(mv.to_string()));
            }
            SessionState::Playing if !self.side_to_move_is_manual() => {
                return Err(AtaxxError::CommandNotAllowed(mv.to_string()));
            }
            _ => {}
        }

        let undo = self.board.make_move(mv)?;
        self.history.push(undo);

        if self.state == SessionState::Playing {
            self.play_until_input()?;
        }
        Ok(())
    }

    /// Block `sq` and its reflections. Setup only.
    pub fn place_blocker(&mut self, sq: Square) -> AtaxxResult<()> {
        self.require_state("block", &[SessionState::Setup])?;
        self.board.place_blocker(sq)
    }

    /// Take back the last move. With nothing to take back the board returns
    /// to the starting position. A finished game reopens if the restored
    /// position is still live, and a computer on move plays again.
    pub fn undo(&mut self) -> AtaxxResult<()> {
        self.take_back();
        self.resume()
    }

    /// Undo until a manual player is on move again, so a human playing the
    /// computer takes back the engine's reply together with their own move.
    /// Only an exhausted history can leave a computer on move; it then replays.
    pub fn undo_to_manual(&mut self) -> AtaxxResult<()> {
        self.take_back();
        while self.state == SessionState::Playing
            && !self.history.is_empty()
            && !self.side_to_move_is_manual()
        {
            self.take_back();
        }
        self.resume()
    }

    fn take_back(&mut self) {
        match self.history.pop() {
            Some(undo) => {
                debug!(mv = %undo.mv, remaining = self.history.len(), "undo");
                self.board.unmake_move(undo);
            }
            None => {
                debug!("undo with empty history resets the board");
                self.board.clear();
            }
        }
        if self.state == SessionState::Finished && !self.board.is_game_over() {
            self.state = SessionState::Playing;
        }
    }

    fn resume(&mut self) -> AtaxxResult<()> {
        if self.state == SessionState::Playing && !self.side_to_move_is_manual() {
            self.play_until_input()?;
        }
        Ok(())
    }

    fn side_to_move_is_manual(&self) -> bool {
        self.players[self.board.side_to_move().index()].is_manual()
    }

    /// Abandon the current game and return to setup with a fresh board.
    pub fn clear(&mut self) {
        self.board.clear();
        self.history.clear();
        self.state = SessionState::Setup;
        self.started_at = None;
    }

    /// Replace the player for `color`. Setup only.
    pub fn set_player(&mut self, color: Color, player: Player) -> AtaxxResult<()> {
        let command = if player.is_manual() { "manual" } else { "auto" };
        self.require_state(command, &[SessionState::Setup])?;
        debug!(%color, player = player.describe(), "player set");
        self.players[color.index()] = player;
        Ok(())
    }

    /// `auto <color> [engine]`: computer player using the session's depth and seed.
    pub fn set_auto(&mut self, color: Color, engine: Option<&str>) -> AtaxxResult<()> {
        let player = Player::from_engine_name(
            engine.unwrap_or("minimax"),
            self.config.search_depth,
            self.seed,
        )?;
        self.set_player(color, player)
    }

    pub fn set_manual(&mut self, color: Color) -> AtaxxResult<()> {
        self.set_player(color, Player::Manual)
    }

    pub fn set_depth(&mut self, depth: u8) -> AtaxxResult<()> {
        let depth = depth.max(1);
        self.config.search_depth = depth;
        for player in &mut self.players {
            player.set_option("Depth", &depth.to_string())?;
        }
        Ok(())
    }

    pub fn set_seed(&mut self, seed: u64) -> AtaxxResult<()> {
        self.seed = Some(seed);
        for player in &mut self.players {
            player.set_option("Seed", &seed.to_string())?;
        }
        Ok(())
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.config.verbose = verbose;
    }

    /// Play computer turns until a manual player is on move or the game ends.
    pub fn play_until_input(&mut self) -> AtaxxResult<()> {
        while self.state == SessionState::Playing {
            if self.board.is_game_over() {
                self.finish();
                break;
            }

            let mover = self.board.side_to_move();
            let params = SearchParams {
                depth: Some(self.config.search_depth),
            };
            let mut info_lines = Vec::new();
            let turn = self.players[mover.index()].take_turn(&self.board, &params, &mut info_lines)?;
            if self.config.verbose {
                for line in &info_lines {
                    self.reporter.info_msg(line);
                }
            }

            match turn {
                Turn::AwaitInput => break,
                Turn::Move(mv) => {
                    let undo = self.board.make_move(mv)?;
                    self.history.push(undo);
                    self.reporter.move_msg(&announce(mover, mv));
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) {
        self.state = SessionState::Finished;
        let outcome = Outcome::from_board(&self.board);
        info!(
            %outcome,
            red = self.board.num_pieces(Color::Red),
            blue = self.board.num_pieces(Color::Blue),
            plies = self.board.move_count(),
            "game over"
        );
        self.reporter.outcome_msg(outcome);
    }

    fn require_state(&self, command: &str, allowed: &[SessionState]) -> AtaxxResult<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(AtaxxError::CommandNotAllowed(command.to_owned()))
        }
    }
}

/// "Red moves a7-b7." or "Blue passes."
pub fn announce(color: Color, mv: Move) -> String {
    if mv.is_pass() {
        format!("{} passes.", color.name())
    } else {
        format!("{} moves {}.", color.name(), mv)
    }
}
