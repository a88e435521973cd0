//! Move value type.
//!
//! A move is either a pass or a transition between two squares of the padded
//! grid. Whether it extends (distance 1) or jumps (distance 2) is derived from
//! the squares; legality is decided by the board.

use std::fmt;
use std::str::FromStr;

use crate::errors::AtaxxError;
use crate::game_state::grid::{self, Square};
use crate::utils::algebraic::{parse_square, square_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Pass,
    Step { from: Square, to: Square },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Pass,
    /// Distance 1: a new piece is added on the destination.
    Extend,
    /// Distance 2: the piece relocates.
    Jump,
    /// Distance 0 or more than 2; never legal.
    Invalid,
}

impl Move {
    #[inline]
    pub const fn pass() -> Self {
        Move::Pass
    }

    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move::Step { from, to }
    }

    /// Build from zero-based playable coordinates.
    #[inline]
    pub const fn from_coords(col0: usize, row0: usize, col1: usize, row1: usize) -> Self {
        Move::Step {
            from: grid::index(col0, row0),
            to: grid::index(col1, row1),
        }
    }

    pub fn kind(&self) -> MoveKind {
        match *self {
            Move::Pass => MoveKind::Pass,
            Move::Step { from, to } => {
                if from >= grid::NUM_CELLS || to >= grid::NUM_CELLS {
                    return MoveKind::Invalid;
                }
                match grid::distance(from, to) {
                    1 => MoveKind::Extend,
                    2 => MoveKind::Jump,
                    _ => MoveKind::Invalid,
                }
            }
        }
    }

    #[inline]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    #[inline]
    pub fn is_extend(&self) -> bool {
        self.kind() == MoveKind::Extend
    }

    #[inline]
    pub fn is_jump(&self) -> bool {
        self.kind() == MoveKind::Jump
    }

    #[inline]
    pub const fn from_square(&self) -> Option<Square> {
        match self {
            Move::Pass => None,
            Move::Step { from, .. } => Some(*from),
        }
    }

    #[inline]
    pub const fn to_square(&self) -> Option<Square> {
        match self {
            Move::Pass => None,
            Move::Step { to, .. } => Some(*to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Pass => f.write_str("-"),
            Move::Step { from, to } => write!(
                f,
                "{}-{}",
                square_to_algebraic(from).unwrap_or_else(|| format!("#{from}")),
                square_to_algebraic(to).unwrap_or_else(|| format!("#{to}"))
            ),
        }
    }
}

/// Accepts `-`, `a7-b7`, `a7b7`, `a7 b7` and `a 7 b 7`. At most one `-`
/// may separate the two squares.
impl FromStr for Move {
    type Err = AtaxxError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || AtaxxError::InvalidCommand(text.to_owned());
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if compact == "-" {
            return Ok(Move::Pass);
        }
        if !compact.is_ascii() {
            return Err(invalid());
        }
        let (from, to) = match compact.len() {
            4 => (&compact[0..2], &compact[2..4]),
            5 if &compact[2..3] == "-" => (&compact[0..2], &compact[3..5]),
            _ => return Err(invalid()),
        };
        Ok(Move::new(parse_square(from)?, parse_square(to)?))
    }
}
