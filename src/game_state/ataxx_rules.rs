//! Rule constants and configurable rule variations.

use crate::game_state::grid::BORDER;

/// Consecutive jumps without an extend after which the game is over.
pub const JUMP_LIMIT: u32 = 25;

/// Default capture radius: every opponent piece within Chebyshev distance 2
/// of the destination flips.
pub const DEFAULT_CAPTURE_RADIUS: usize = 2;

/// Starting squares, as zero-based `(col, row)`: Red on a7 and g1, Blue on a1
/// and g7.
pub const RED_START: [(usize, usize); 2] = [(0, 6), (6, 0)];
pub const BLUE_START: [(usize, usize); 2] = [(0, 0), (6, 6)];

/// How jump moves drive the jump-without-extend counter. Extends always reset
/// it and passes never touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpCounterPolicy {
    /// A jump immediately following an extend (ignoring passes) leaves the
    /// counter at zero; every other jump increments it.
    #[default]
    SkipFirstAfterExtend,
    /// Every jump increments the counter.
    CountEveryJump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    pub jump_limit: u32,
    /// Clamped to `1..=BORDER` when applied.
    pub capture_radius: usize,
    pub jump_counter: JumpCounterPolicy,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            jump_limit: JUMP_LIMIT,
            capture_radius: DEFAULT_CAPTURE_RADIUS,
            jump_counter: JumpCounterPolicy::default(),
        }
    }
}

impl RulesConfig {
    /// Classic Ataxx: captures only touch the eight adjacent squares.
    pub fn classic() -> Self {
        Self {
            capture_radius: 1,
            ..Self::default()
        }
    }

    #[inline]
    pub fn effective_capture_radius(&self) -> isize {
        self.capture_radius.clamp(1, BORDER) as isize
    }
}
