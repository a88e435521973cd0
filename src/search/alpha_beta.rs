//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! Written in negamax form: every node scores the position for its own side
//! to move and negates its children's scores, so the maximizing and
//! minimizing levels share one routine. The walk runs make/unmake on a
//! private detached copy; the caller's board is never touched.

use tracing::{debug, trace};

use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::board::Board;
use crate::moves::ataxx_move::Move;
use crate::search::board_scoring::{terminal_score, BoardScorer, WINNING_VALUE};

/// Larger than any score a node can return.
const INFINITY: i32 = WINNING_VALUE + 1;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies searched before static evaluation. Zero is treated as one.
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 4 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Value of `best_move` for the side to move.
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
}

/// Best move for the side to move of `board`.
///
/// Ties go to the earliest move in generation order. When the side to move
/// has no move the result is a pass. Errors with `GameOver` on a finished
/// position.
pub fn search_best_move<S: BoardScorer>(
    board: &Board,
    scorer: &S,
    config: SearchConfig,
) -> AtaxxResult<SearchResult> {
    if board.is_game_over() {
        return Err(AtaxxError::GameOver);
    }

    let depth = config.max_depth.max(1);
    let mut working = board.detached();
    let mut nodes = 0u64;
    let (best_move, best_score) = negamax_root(&mut working, scorer, depth, &mut nodes);

    debug!(
        side = %board.side_to_move(),
        depth,
        nodes,
        best_move = %best_move,
        best_score,
        "search finished"
    );

    Ok(SearchResult {
        best_move,
        best_score,
        depth,
        nodes,
    })
}

fn negamax_root<S: BoardScorer>(
    board: &mut Board,
    scorer: &S,
    depth: u8,
    nodes: &mut u64,
) -> (Move, i32) {
    let moves = board.moves_or_pass();
    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best_move = moves[0];
    let mut best_score = -INFINITY;

    for mv in moves {
        let undo = board.make_move_unchecked(mv);
        let score = -negamax(board, scorer, depth - 1, -beta, -alpha, 1, nodes);
        board.restore(&undo);

        trace!(%mv, score, "root move");
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
        if score > alpha {
            alpha = score;
        }
    }

    (best_move, best_score)
}

fn negamax<S: BoardScorer>(
    board: &mut Board,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if board.is_game_over() {
        return terminal_score(board, ply);
    }
    if depth == 0 {
        return scorer.score(board);
    }

    let mut best = -INFINITY;
    for mv in board.moves_or_pass() {
        let undo = board.make_move_unchecked(mv);
        let score = -negamax(
            board,
            scorer,
            depth - 1,
            -beta,
            -alpha,
            ply.saturating_add(1),
            nodes,
        );
        board.restore(&undo);

        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::{negamax, search_best_move, SearchConfig, INFINITY};
    use crate::errors::AtaxxError;
    use crate::game_state::ataxx_types::Color;
    use crate::game_state::board::Board;
    use crate::moves::ataxx_move::Move;
    use crate::search::board_scoring::{MaterialScorer, WINNING_VALUE};
    use crate::utils::algebraic::parse_square;

    fn sq(text: &str) -> usize {
        parse_square(text).expect("square should parse")
    }

    /// Plain minimax without pruning, for cross-checking values.
    fn minimax(board: &mut Board, depth: u8, ply: u8) -> i32 {
        if board.is_game_over() {
            return crate::search::board_scoring::terminal_score(board, ply);
        }
        if depth == 0 {
            use crate::search::board_scoring::BoardScorer;
            return MaterialScorer.score(board);
        }
        let mut best = -INFINITY;
        for mv in board.moves_or_pass() {
            let undo = board.make_move_unchecked(mv);
            best = best.max(-minimax(board, depth - 1, ply + 1));
            board.restore(&undo);
        }
        best
    }

    #[test]
    fn start_position_search_returns_a_legal_move_and_leaves_board_alone() {
        let board = Board::new();
        let before = board.clone();
        let result = search_best_move(&board, &MaterialScorer, SearchConfig::default())
            .expect("search should run");
        assert!(!result.best_move.is_pass());
        assert!(board.is_legal(result.best_move));
        assert_eq!(result.depth, 4);
        assert_eq!(board, before);
    }

    #[test]
    fn depth_one_prefers_the_biggest_capture() {
        let mut board = Board::new();
        board.set_piece(sq("d4"), Some(Color::Blue)).expect("editable");
        board.set_piece(sq("d5"), Some(Color::Blue)).expect("editable");
        board.set_piece(sq("e4"), Some(Color::Blue)).expect("editable");
        board.set_piece(sq("c6"), Some(Color::Red)).expect("editable");

        let result = search_best_move(&board, &MaterialScorer, SearchConfig { max_depth: 1 })
            .expect("search should run");
        let after = {
            let mut b = board.clone();
            b.make_move(result.best_move).expect("best move is legal");
            b
        };
        // Jumping to e5 or e6 also reaches g7, leaving only a1.
        assert_eq!(after.num_pieces(Color::Blue), 1);
    }

    #[test]
    fn forced_win_outranks_material() {
        // Blue has a single piece next to Red: any extend onto a square within
        // reach of it wins the game outright.
        let mut board = Board::new();
        for name in ["a1", "g7"] {
            board.set_piece(sq(name), None).expect("editable");
        }
        board.set_piece(sq("d4"), Some(Color::Blue)).expect("editable");
        board.set_piece(sq("c4"), Some(Color::Red)).expect("editable");

        let result = search_best_move(&board, &MaterialScorer, SearchConfig { max_depth: 2 })
            .expect("search should run");
        assert!(result.best_score > WINNING_VALUE - 10);
        let mut b = board.clone();
        b.make_move(result.best_move).expect("legal");
        assert_eq!(b.num_pieces(Color::Blue), 0);
    }

    #[test]
    fn ties_go_to_the_first_generated_move() {
        // Depth one from the start: all six extends score +1 for Red and the
        // first generated extend is g1-f1.
        let board = Board::new();
        let result = search_best_move(&board, &MaterialScorer, SearchConfig { max_depth: 1 })
            .expect("search should run");
        assert_eq!(result.best_move, "g1-f1".parse::<Move>().expect("move"));
        assert_eq!(result.best_score, 1);
    }

    #[test]
    fn pruning_matches_plain_minimax() {
        let mut board = Board::new();
        for text in ["a7-b6", "g7-f6", "g1-e3"] {
            board.make_move(text.parse().expect("move")).expect("legal");
        }
        for depth in 1..=3u8 {
            let mut working = board.clone();
            let mut nodes = 0;
            let pruned = negamax(&mut working, &MaterialScorer, depth, -INFINITY, INFINITY, 0, &mut nodes);
            let plain = minimax(&mut board.clone(), depth, 0);
            assert_eq!(pruned, plain, "depth {depth}");
            assert_eq!(working, board);
        }
    }

    #[test]
    fn finished_game_is_rejected() {
        let mut board = Board::new();
        for name in ["a7", "g1"] {
            board.set_piece(sq(name), None).expect("editable");
        }
        let err = search_best_move(&board, &MaterialScorer, SearchConfig::default())
            .expect_err("search on a finished game should fail");
        assert!(matches!(err, AtaxxError::GameOver));
    }

    #[test]
    fn boxed_in_side_passes() {
        let mut board = Board::new();
        board.set_piece(sq("g1"), None).expect("editable");
        for name in ["a6", "b6", "b7", "a5", "b5", "c5", "c6", "c7"] {
            board.set_piece(sq(name), Some(Color::Blue)).expect("editable");
        }
        assert!(!board.is_game_over());

        let result = search_best_move(&board, &MaterialScorer, SearchConfig { max_depth: 2 })
            .expect("search should run");
        assert_eq!(result.best_move, Move::Pass);
        assert!(board.is_legal(result.best_move));
    }
}
