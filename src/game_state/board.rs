//! Core board state.
//!
//! `Board` stores the padded cell array, side to move, running piece/blocker
//! counts, the jump-without-extend counter and the ordered move log. Move
//! legality, generation and application live in `move_generation` as further
//! `impl Board` blocks; this module owns construction, setup and queries.
//!
//! Mutations are announced on an optional `mpsc` channel so a front end can
//! refresh without the board knowing who listens.

use std::fmt;
use std::sync::mpsc::Sender;

use tracing::debug;

use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::ataxx_rules::{RulesConfig, BLUE_START, RED_START};
use crate::game_state::ataxx_types::{Color, SquareState};
use crate::game_state::grid::{self, Square, NUM_CELLS, SIDE};
use crate::moves::ataxx_move::Move;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::render_board::render_board;

/// Change notification sent after every mutating call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    Cleared,
    MoveApplied(Move),
    MoveUndone(Move),
    BlockerPlaced(Square),
    PieceSet(Square),
}

#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) cells: [SquareState; NUM_CELLS],
    pub(crate) side_to_move: Color,
    pub(crate) piece_counts: [u32; 2],
    pub(crate) blocker_count: u32,
    pub(crate) jumps_since_extend: u32,
    pub(crate) last_non_pass_was_extend: bool,
    pub(crate) move_count: u32,
    pub(crate) non_pass_count: u32,
    pub(crate) move_log: Vec<Move>,
    pub(crate) rules: RulesConfig,
    events: Option<Sender<BoardEvent>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board in the standard starting position.
    pub fn new() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    pub fn with_rules(rules: RulesConfig) -> Self {
        let mut board = Self {
            cells: [SquareState::Blocked; NUM_CELLS],
            side_to_move: Color::Red,
            piece_counts: [0; 2],
            blocker_count: 0,
            jumps_since_extend: 0,
            last_non_pass_was_extend: false,
            move_count: 0,
            non_pass_count: 0,
            move_log: Vec::new(),
            rules,
            events: None,
        };
        board.reset_to_start();
        board
    }

    /// Attach a change-notification channel.
    pub fn with_events(mut self, events: Sender<BoardEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// A copy of this board that sends no notifications.
    pub fn detached(&self) -> Self {
        Self {
            events: None,
            ..self.clone()
        }
    }

    /// Reset to the starting position: four corner pieces, no blockers, Red to
    /// move, counters and move log cleared.
    pub fn clear(&mut self) {
        self.reset_to_start();
        debug!("board cleared");
        self.notify(BoardEvent::Cleared);
    }

    fn reset_to_start(&mut self) {
        self.cells = [SquareState::Blocked; NUM_CELLS];
        for sq in grid::playable_squares() {
            self.cells[sq] = SquareState::Empty;
        }
        for (col, row) in RED_START {
            self.cells[grid::index(col, row)] = SquareState::Red;
        }
        for (col, row) in BLUE_START {
            self.cells[grid::index(col, row)] = SquareState::Blue;
        }
        self.side_to_move = Color::Red;
        self.piece_counts = [RED_START.len() as u32, BLUE_START.len() as u32];
        self.blocker_count = 0;
        self.jumps_since_extend = 0;
        self.last_non_pass_was_extend = false;
        self.move_count = 0;
        self.non_pass_count = 0;
        self.move_log.clear();
    }

    /// Contents of the padded-grid cell `sq`. Border cells read as `Blocked`.
    #[inline]
    pub fn get(&self, sq: Square) -> SquareState {
        self.cells.get(sq).copied().unwrap_or(SquareState::Blocked)
    }

    /// Contents of the playable square at zero-based `col`, `row`.
    #[inline]
    pub fn get_at(&self, col: usize, row: usize) -> SquareState {
        if col >= SIDE || row >= SIDE {
            return SquareState::Blocked;
        }
        self.cells[grid::index(col, row)]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn num_pieces(&self, color: Color) -> u32 {
        self.piece_counts[color.index()]
    }

    /// Blockers placed inside the playing area (border cells excluded).
    #[inline]
    pub fn num_blockers(&self) -> u32 {
        self.blocker_count
    }

    /// Consecutive jumps since the last extend, per the configured policy.
    #[inline]
    pub fn jumps_since_extend(&self) -> u32 {
        self.jumps_since_extend
    }

    /// Moves and passes since the last clear.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Non-pass moves since the last clear.
    #[inline]
    pub fn non_pass_move_count(&self) -> u32 {
        self.non_pass_count
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Number of cells in the whole padded grid holding `state`.
    pub fn count_cells(&self, state: SquareState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Block `sq` and its reflections across the middle row and column.
    ///
    /// Fails if `sq` itself is not an empty playable square; reflections that
    /// are already occupied or blocked are skipped.
    pub fn place_blocker(&mut self, sq: Square) -> AtaxxResult<()> {
        if !grid::is_playable(sq) || !self.cells[sq].is_empty() {
            return Err(AtaxxError::IllegalBlockPlacement(square_label(sq)));
        }

        let col = grid::col_of(sq) as usize;
        let row = grid::row_of(sq) as usize;
        let mirror_col = SIDE - 1 - col;
        let mirror_row = SIDE - 1 - row;
        for (c, r) in [
            (col, row),
            (col, mirror_row),
            (mirror_col, row),
            (mirror_col, mirror_row),
        ] {
            let target = grid::index(c, r);
            if self.cells[target].is_empty() {
                self.cells[target] = SquareState::Blocked;
                self.blocker_count += 1;
            }
        }

        debug!(square = %square_label(sq), blockers = self.blocker_count, "blocker placed");
        self.notify(BoardEvent::BlockerPlaced(sq));
        Ok(())
    }

    /// Put a piece of `color` on `sq`, or empty it with `None`, keeping the
    /// piece counts in step. Only empty or piece-holding playable squares can
    /// be edited; used to set up positions.
    pub fn set_piece(&mut self, sq: Square, color: Option<Color>) -> AtaxxResult<()> {
        if !grid::is_playable(sq) || self.cells[sq] == SquareState::Blocked {
            return Err(AtaxxError::InvalidSquare(square_label(sq)));
        }
        if let Some(old) = self.cells[sq].color() {
            self.piece_counts[old.index()] -= 1;
        }
        self.cells[sq] = match color {
            Some(c) => {
                self.piece_counts[c.index()] += 1;
                SquareState::from(c)
            }
            None => SquareState::Empty,
        };
        self.notify(BoardEvent::PieceSet(sq));
        Ok(())
    }

    /// Override whose turn it is; used together with `set_piece`.
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(crate) fn notify(&self, event: BoardEvent) {
        if let Some(events) = &self.events {
            // A dropped receiver just means nobody is listening any more.
            let _ = events.send(event);
        }
    }
}

/// Boards compare by position: cells, side to move, counters and move log.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.side_to_move == other.side_to_move
            && self.piece_counts == other.piece_counts
            && self.blocker_count == other.blocker_count
            && self.jumps_since_extend == other.jumps_since_extend
            && self.last_non_pass_was_extend == other.last_non_pass_was_extend
            && self.move_count == other.move_count
            && self.non_pass_count == other.non_pass_count
            && self.move_log == other.move_log
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

fn square_label(sq: Square) -> String {
    square_to_algebraic(sq).unwrap_or_else(|| format!("#{sq}"))
}
