//! Where the session sends user-facing messages.

use std::fmt;
use std::io::Write;

use crate::game_state::ataxx_types::Color;
use crate::game_state::board::Board;

/// Final result of a game, decided by piece counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    RedWins,
    BlueWins,
    Draw,
}

impl Outcome {
    pub fn from_board(board: &Board) -> Self {
        match board.leader() {
            Some(Color::Red) => Self::RedWins,
            Some(Color::Blue) => Self::BlueWins,
            None => Self::Draw,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            Self::RedWins => Some(Color::Red),
            Self::BlueWins => Some(Color::Blue),
            Self::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RedWins => "Red wins.",
            Self::BlueWins => "Blue wins.",
            Self::Draw => "Draw.",
        })
    }
}

pub trait Reporter {
    /// Announcement of a computer player's move.
    fn move_msg(&mut self, msg: &str);
    fn error_msg(&mut self, msg: &str);
    fn outcome_msg(&mut self, outcome: Outcome);
    /// Anything else the user asked to see: dumps, help text, engine info.
    fn info_msg(&mut self, msg: &str);
}

/// Writes each message as one line. Errors go to `err`, everything else to
/// `out`. Write failures are dropped; there is nowhere left to report them.
pub struct WriterReporter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> WriterReporter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    fn line(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
        let _ = self.out.flush();
    }
}

impl WriterReporter<std::io::Stdout, std::io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<W: Write, E: Write> Reporter for WriterReporter<W, E> {
    fn move_msg(&mut self, msg: &str) {
        self.line(msg);
    }

    fn error_msg(&mut self, msg: &str) {
        let _ = writeln!(self.err, "{msg}");
        let _ = self.err.flush();
    }

    fn outcome_msg(&mut self, outcome: Outcome) {
        self.line(&outcome.to_string());
    }

    fn info_msg(&mut self, msg: &str) {
        self.line(msg);
    }
}

/// Keeps every message in memory, tagged by kind.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub moves: Vec<String>,
    pub errors: Vec<String>,
    pub outcomes: Vec<Outcome>,
    pub info: Vec<String>,
}

impl Reporter for RecordingReporter {
    fn move_msg(&mut self, msg: &str) {
        self.moves.push(msg.to_owned());
    }

    fn error_msg(&mut self, msg: &str) {
        self.errors.push(msg.to_owned());
    }

    fn outcome_msg(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    fn info_msg(&mut self, msg: &str) {
        self.info.push(msg.to_owned());
    }
}
