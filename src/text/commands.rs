//! Line-oriented command parsing.

use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::ataxx_types::Color;
use crate::game_state::grid::Square;
use crate::moves::ataxx_move::Move;
use crate::utils::algebraic::parse_square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A piece move or `-` for a pass.
    Play(Move),
    Block(Square),
    Start,
    Clear,
    Auto { color: Color, engine: Option<String> },
    Manual(Color),
    Seed(u64),
    Depth(u8),
    Undo,
    Dump,
    Help,
    Verbose(bool),
    Load(String),
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  a7-b7        move a piece (also a7b7 or a 7 b 7)
  -            pass; only legal when you have no other move
  block c5     block c5 and its reflections (setup only; also c 5)
  start        begin play from the current position
  clear        abandon the game and return to setup
  auto C [E]   let the computer play color C (red or blue) with engine E
               (minimax, mobility, greedy or random)
  manual C     take over color C yourself (setup only)
  seed N       seed the random engines
  depth N      search depth for the minimax engines
  undo         take back your last move
  dump         print the board
  verbose on   show engine diagnostics (off to hide)
  load FILE    run commands from FILE
  help         show this text
  quit         leave";

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> AtaxxResult<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut parts = trimmed.split_whitespace();
    let keyword = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();
    let not_understood = || AtaxxError::InvalidCommand(trimmed.to_owned());

    let command = match (keyword, args.as_slice()) {
        ("start", []) => Command::Start,
        ("clear", []) => Command::Clear,
        ("undo", []) => Command::Undo,
        ("dump", []) => Command::Dump,
        ("help", []) => Command::Help,
        ("quit", []) => Command::Quit,
        ("block", [square]) => Command::Block(parse_square(square)?),
        ("block", [col, row]) => Command::Block(parse_square(&format!("{col}{row}"))?),
        ("auto", [color]) => Command::Auto {
            color: Color::parse(color).ok_or_else(not_understood)?,
            engine: None,
        },
        ("auto", [color, engine]) => Command::Auto {
            color: Color::parse(color).ok_or_else(not_understood)?,
            engine: Some((*engine).to_owned()),
        },
        ("manual", [color]) => Command::Manual(Color::parse(color).ok_or_else(not_understood)?),
        ("seed", [n]) => Command::Seed(n.parse().map_err(|_| not_understood())?),
        ("depth", [n]) => Command::Depth(n.parse().map_err(|_| not_understood())?),
        ("verbose", []) => Command::Verbose(true),
        ("verbose", ["on"]) => Command::Verbose(true),
        ("verbose", ["off"]) => Command::Verbose(false),
        ("load", [path]) => Command::Load((*path).to_owned()),
        _ => Command::Play(trimmed.parse::<Move>().map_err(|_| not_understood())?),
    };
    Ok(Some(command))
}
