//! Move application with capture propagation, and its exact inverse.

use tracing::{debug, trace};

use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::ataxx_rules::JumpCounterPolicy;
use crate::game_state::ataxx_types::{Color, SquareState};
use crate::game_state::board::{Board, BoardEvent};
use crate::game_state::grid::{self, Square};
use crate::game_state::undo_state::UndoState;
use crate::moves::ataxx_move::{Move, MoveKind};

impl Board {
    /// Play `mv` for the side to move.
    ///
    /// Illegal moves are rejected with `IllegalMove` and leave the board
    /// untouched. On success the returned snapshot restores the prior position
    /// through `unmake_move`.
    pub fn make_move(&mut self, mv: Move) -> AtaxxResult<UndoState> {
        if !self.is_legal(mv) {
            debug!(%mv, side = %self.side_to_move, "illegal move rejected");
            return Err(AtaxxError::IllegalMove(mv));
        }
        let undo = self.make_move_unchecked(mv);
        debug!(
            %mv,
            red = self.num_pieces(Color::Red),
            blue = self.num_pieces(Color::Blue),
            "move applied"
        );
        self.notify(BoardEvent::MoveApplied(mv));
        Ok(undo)
    }

    /// The side to move passes. Legal only when it has no other move.
    pub fn pass(&mut self) -> AtaxxResult<UndoState> {
        self.make_move(Move::Pass)
    }

    /// Apply a move already known to be legal. Sends no notification.
    pub(crate) fn make_move_unchecked(&mut self, mv: Move) -> UndoState {
        let undo = self.snapshot(mv);
        let mover = self.side_to_move;

        match (mv, mv.kind()) {
            (Move::Step { to, .. }, MoveKind::Extend) => {
                self.cells[to] = SquareState::from(mover);
                self.piece_counts[mover.index()] += 1;
                self.jumps_since_extend = 0;
                self.last_non_pass_was_extend = true;
                self.capture_around(to);
                self.non_pass_count += 1;
            }
            (Move::Step { from, to }, MoveKind::Jump) => {
                self.cells[from] = SquareState::Empty;
                self.cells[to] = SquareState::from(mover);
                self.jumps_since_extend = match self.rules.jump_counter {
                    JumpCounterPolicy::SkipFirstAfterExtend if self.last_non_pass_was_extend => 0,
                    _ => self.jumps_since_extend + 1,
                };
                self.last_non_pass_was_extend = false;
                self.capture_around(to);
                self.non_pass_count += 1;
            }
            _ => {}
        }

        self.side_to_move = mover.opposite();
        self.move_count += 1;
        self.move_log.push(mv);
        undo
    }

    /// Restore the position captured in `undo`.
    pub fn unmake_move(&mut self, undo: UndoState) {
        self.restore(&undo);
        self.notify(BoardEvent::MoveUndone(undo.mv));
    }

    pub(crate) fn restore(&mut self, undo: &UndoState) {
        self.cells = undo.prev_cells;
        self.side_to_move = undo.prev_side_to_move;
        self.piece_counts = undo.prev_piece_counts;
        self.blocker_count = undo.prev_blocker_count;
        self.jumps_since_extend = undo.prev_jumps_since_extend;
        self.last_non_pass_was_extend = undo.prev_last_non_pass_was_extend;
        self.move_count = undo.prev_move_count;
        self.non_pass_count = undo.prev_non_pass_count;
        self.move_log.pop();
    }

    fn snapshot(&self, mv: Move) -> UndoState {
        UndoState {
            mv,
            prev_cells: self.cells,
            prev_side_to_move: self.side_to_move,
            prev_piece_counts: self.piece_counts,
            prev_blocker_count: self.blocker_count,
            prev_jumps_since_extend: self.jumps_since_extend,
            prev_last_non_pass_was_extend: self.last_non_pass_was_extend,
            prev_move_count: self.move_count,
            prev_non_pass_count: self.non_pass_count,
        }
    }

    /// Flip every opponent piece within the capture radius of `center` to the
    /// side to move.
    fn capture_around(&mut self, center: Square) {
        let mover = self.side_to_move;
        let enemy = SquareState::from(mover.opposite());
        let radius = self.rules.effective_capture_radius();
        let mut flipped = 0u32;
        for (dc, dr) in grid::neighborhood(radius) {
            let sq = grid::neighbor(center, dc, dr);
            if self.cells[sq] == enemy {
                self.cells[sq] = SquareState::from(mover);
                flipped += 1;
            }
        }
        self.piece_counts[mover.index()] += flipped;
        self.piece_counts[mover.opposite().index()] -= flipped;
        if flipped > 0 {
            trace!(flipped, "captured");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::AtaxxError;
    use crate::game_state::ataxx_rules::{JumpCounterPolicy, RulesConfig};
    use crate::game_state::ataxx_types::{Color, SquareState};
    use crate::game_state::board::Board;
    use crate::moves::ataxx_move::Move;
    use crate::utils::algebraic::parse_square;

    fn sq(text: &str) -> usize {
        parse_square(text).expect("square should parse")
    }

    fn play(board: &mut Board, moves: &[&str]) {
        for text in moves {
            let mv: Move = text.parse().expect("move should parse");
            board.make_move(mv).expect("move should be legal");
        }
    }

    #[test]
    fn extend_adds_a_piece_and_keeps_the_source() {
        let mut board = Board::new();
        play(&mut board, &["a7-b7"]);
        assert_eq!(board.get(sq("b7")), SquareState::Red);
        assert_eq!(board.get(sq("a7")), SquareState::Red);
        assert_eq!(board.num_pieces(Color::Red), 3);
        assert_eq!(board.side_to_move(), Color::Blue);
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.non_pass_move_count(), 1);
    }

    #[test]
    fn jump_relocates_the_piece() {
        let mut board = Board::new();
        play(&mut board, &["a7-c5"]);
        assert_eq!(board.get(sq("a7")), SquareState::Empty);
        assert_eq!(board.get(sq("c5")), SquareState::Red);
        assert_eq!(board.num_pieces(Color::Red), 2);
    }

    #[test]
    fn capture_flips_opponents_within_two_squares() {
        let mut board = Board::new();
        board.set_piece(sq("d4"), Some(Color::Blue)).expect("editable");
        board.set_piece(sq("e6"), Some(Color::Blue)).expect("editable");
        board.set_piece(sq("d7"), Some(Color::Blue)).expect("editable");
        board.set_piece(sq("c6"), Some(Color::Red)).expect("editable");
        // c6-d6 lands next to d4 (distance 2) and e6 (distance 1); d7 is
        // adjacent too. Every one of them flips with the default radius.
        play(&mut board, &["c6-d6"]);
        for name in ["d4", "e6", "d7", "d6"] {
            assert_eq!(board.get(sq(name)), SquareState::Red, "{name}");
        }
        assert_eq!(board.num_pieces(Color::Blue), 2);
        assert_eq!(board.num_pieces(Color::Red), 3 + 1 + 3);
    }

    #[test]
    fn classic_radius_only_flips_adjacent_pieces() {
        let mut board = Board::with_rules(RulesConfig::classic());
        board.set_piece(sq("d4"), Some(Color::Blue)).expect("editable");
        board.set_piece(sq("e6"), Some(Color::Blue)).expect("editable");
        board.set_piece(sq("c6"), Some(Color::Red)).expect("editable");
        play(&mut board, &["c6-d6"]);
        assert_eq!(board.get(sq("e6")), SquareState::Red);
        assert_eq!(board.get(sq("d4")), SquareState::Blue);
    }

    #[test]
    fn illegal_move_leaves_board_and_turn_unchanged() {
        let mut board = Board::new();
        let before = board.clone();
        let err = board
            .make_move("a7-d7".parse().expect("move"))
            .expect_err("distance 3 should be rejected");
        assert!(matches!(err, AtaxxError::IllegalMove(_)));
        assert_eq!(board, before);
        assert!(board.pass().is_err());
        assert_eq!(board.side_to_move(), Color::Red);
    }

    #[test]
    fn unmake_restores_every_field() {
        let mut board = Board::new();
        play(&mut board, &["a7-b7", "g7-f6"]);
        let before = board.clone();
        let undo = board
            .make_move("b7-d6".parse().expect("move"))
            .expect("jump should be legal");
        assert_ne!(board, before);
        board.unmake_move(undo);
        assert_eq!(board, before);
    }

    #[test]
    fn jump_counter_skips_first_jump_after_extend() {
        let mut board = Board::new();
        play(&mut board, &["a7-c5", "a1-c3"]);
        assert_eq!(board.jumps_since_extend(), 2);
        play(&mut board, &["g1-f1"]);
        assert_eq!(board.jumps_since_extend(), 0);
        play(&mut board, &["g7-e5"]);
        assert_eq!(board.jumps_since_extend(), 0);
        play(&mut board, &["f1-d1"]);
        assert_eq!(board.jumps_since_extend(), 1);
    }

    #[test]
    fn jump_counter_can_count_every_jump() {
        let rules = RulesConfig {
            jump_counter: JumpCounterPolicy::CountEveryJump,
            ..RulesConfig::default()
        };
        let mut board = Board::with_rules(rules);
        play(&mut board, &["g1-f1", "g7-e5"]);
        assert_eq!(board.jumps_since_extend(), 1);
    }

    #[test]
    fn jump_limit_ends_the_game() {
        let rules = RulesConfig {
            jump_limit: 2,
            ..RulesConfig::default()
        };
        let mut board = Board::with_rules(rules);
        play(&mut board, &["a7-c7"]);
        assert!(!board.is_game_over());
        play(&mut board, &["a1-c1"]);
        assert!(board.is_game_over());
    }
}
