//! Text front end and command loop.
//!
//! Reads one command per line, routes it to the game session and reports
//! failures through the session's reporter without stopping the loop.

use std::fs;
use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::errors::{AtaxxError, AtaxxResult};
use crate::game::reporter::{Reporter, WriterReporter};
use crate::game::session::Game;
use crate::text::commands::{parse_command, Command, HELP_TEXT};
use crate::utils::render_board::render_dump;

/// Nested `load` commands stop at this depth.
const MAX_LOAD_DEPTH: usize = 8;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(Game::new(WriterReporter::stdio()));
    console.run(stdin.lock())
}

pub struct Console<R: Reporter> {
    game: Game<R>,
    load_depth: usize,
}

impl<R: Reporter> Console<R> {
    pub fn new(game: Game<R>) -> Self {
        Self {
            game,
            load_depth: 0,
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<R> {
        &mut self.game
    }

    /// Process lines until `quit` or end of input.
    pub fn run<B: BufRead>(&mut self, input: B) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line) {
                break;
            }
        }
        Ok(())
    }

    /// Handle one line, reporting any error. Returns true on `quit`.
    pub fn handle_line(&mut self, line: &str) -> bool {
        match self.execute(line) {
            Ok(quit) => quit,
            Err(err) => {
                debug!(%err, line, "command failed");
                self.game.reporter_mut().error_msg(&err.to_string());
                false
            }
        }
    }

    fn execute(&mut self, line: &str) -> AtaxxResult<bool> {
        let Some(command) = parse_command(line)? else {
            return Ok(false);
        };

        match command {
            Command::Play(mv) => self.game.submit_move(mv)?,
            Command::Block(sq) => self.game.place_blocker(sq)?,
            Command::Start => self.game.start()?,
            Command::Clear => self.game.clear(),
            Command::Auto { color, engine } => self.game.set_auto(color, engine.as_deref())?,
            Command::Manual(color) => self.game.set_manual(color)?,
            Command::Seed(seed) => self.game.set_seed(seed)?,
            Command::Depth(depth) => self.game.set_depth(depth)?,
            Command::Undo => self.game.undo_to_manual()?,
            Command::Dump => {
                let dump = render_dump(self.game.board());
                self.game.reporter_mut().info_msg(&dump);
            }
            Command::Help => self.game.reporter_mut().info_msg(HELP_TEXT),
            Command::Verbose(on) => self.game.set_verbose(on),
            Command::Load(path) => return self.load(&path),
            Command::Quit => return Ok(true),
        }
        Ok(false)
    }

    /// Run the commands in `path` as if typed; a `quit` inside ends the session.
    fn load(&mut self, path: &str) -> AtaxxResult<bool> {
        if self.load_depth >= MAX_LOAD_DEPTH {
            warn!(path, "load nesting too deep");
            return Err(AtaxxError::CommandNotAllowed(format!("load {path}")));
        }
        let contents = fs::read_to_string(path)?;
        self.load_depth += 1;
        let mut quit = false;
        for line in contents.lines() {
            if self.handle_line(line) {
                quit = true;
                break;
            }
        }
        self.load_depth -= 1;
        Ok(quit)
    }
}

#[cfg(test)]
mod tests {
    use super::Console;
    use crate::game::reporter::{Outcome, RecordingReporter};
    use crate::game::session::{Game, SessionConfig, SessionState};
    use crate::game_state::ataxx_types::Color;

    fn console() -> Console<RecordingReporter> {
        Console::new(Game::with_config(
            RecordingReporter::default(),
            SessionConfig {
                search_depth: 1,
                ..SessionConfig::default()
            },
        ))
    }

    #[test]
    fn scripted_session() {
        let mut console = console();
        let script = "block c5\nstart\na7-b7\ndump\nquit\nstart\n";
        console.run(script.as_bytes()).expect("script runs");

        let game = console.game();
        assert_eq!(game.state(), SessionState::Playing);
        assert_eq!(game.board().num_blockers(), 4);
        assert_eq!(game.history_len(), 2);
        let reporter = game.reporter();
        assert_eq!(reporter.moves.len(), 1);
        assert!(reporter.moves[0].starts_with("Blue moves "));
        assert!(reporter.info[0].starts_with("===\n"));
        assert!(reporter.errors.is_empty());
    }

    #[test]
    fn errors_are_reported_and_the_loop_continues() {
        let mut console = console();
        assert!(!console.handle_line("flip the board"));
        assert!(!console.handle_line("start"));
        assert!(!console.handle_line("block d4"));
        assert!(!console.handle_line("a7-a4"));

        let errors = &console.game().reporter().errors;
        assert_eq!(
            errors,
            &vec![
                "Command not understood: flip the board".to_owned(),
                "'block' command is not allowed now.".to_owned(),
                "Illegal move: a7-a4".to_owned(),
            ]
        );
    }

    #[test]
    fn computer_against_computer_reports_outcome() {
        let mut console = console();
        for line in ["seed 9", "auto red random", "auto blue random", "start"] {
            assert!(!console.handle_line(line));
        }
        let game = console.game();
        assert_eq!(game.state(), SessionState::Finished);
        let outcome = Outcome::from_board(game.board());
        assert_eq!(game.reporter().outcomes, vec![outcome]);
        assert!(game
            .reporter()
            .moves
            .iter()
            .all(|m| m.starts_with("Red ") || m.starts_with("Blue ")));
    }

    #[test]
    fn manual_and_undo_commands() {
        let mut console = console();
        assert!(!console.handle_line("manual blue"));
        assert!(console.game().player(Color::Blue).is_manual());
        assert!(!console.handle_line("start"));
        assert!(!console.handle_line("a7-b7"));
        assert!(!console.handle_line("g7-f6"));
        assert!(!console.handle_line("undo"));
        assert_eq!(console.game().history_len(), 1);
        assert_eq!(console.game().board().side_to_move(), Color::Blue);
        assert!(console.handle_line("quit"));
    }

    #[test]
    fn computer_replays_after_undo_of_its_opening() {
        let mut console = console();
        for line in ["auto red", "manual blue", "start", "undo", "g7-f6"] {
            assert!(!console.handle_line(line), "{line}");
        }
        let game = console.game();
        assert!(game.reporter().errors.is_empty(), "{:?}", game.reporter().errors);
        assert_eq!(game.state(), SessionState::Playing);
        assert_eq!(game.history_len(), 3);
        assert_eq!(game.board().side_to_move(), Color::Blue);
        assert_eq!(game.reporter().moves.len(), 3);
    }
}
