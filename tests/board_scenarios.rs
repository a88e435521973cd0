use ataxx_engine::errors::AtaxxError;
use ataxx_engine::game::reporter::Outcome;
use ataxx_engine::game_state::ataxx_types::{Color, SquareState};
use ataxx_engine::game_state::board::Board;
use ataxx_engine::game_state::grid::{self, NUM_CELLS, NUM_PLAYABLE};
use ataxx_engine::moves::ataxx_move::Move;
use ataxx_engine::search::alpha_beta::{search_best_move, SearchConfig};
use ataxx_engine::search::board_scoring::MaterialScorer;
use ataxx_engine::utils::algebraic::parse_square;

fn sq(text: &str) -> usize {
    parse_square(text).expect("square should parse")
}

fn mv(text: &str) -> Move {
    text.parse().expect("move should parse")
}

#[test]
fn extend_adds_a_piece_and_keeps_the_source() {
    let mut board = Board::new();
    board.make_move(mv("a7-b7")).expect("legal extend");

    assert_eq!(board.get(sq("b7")), SquareState::Red);
    assert_eq!(board.get(sq("a7")), SquareState::Red);
    assert_eq!(board.num_pieces(Color::Red), 3);
    assert_eq!(board.side_to_move(), Color::Blue);
}

#[test]
fn blue_extend_without_neighbours_flips_nothing() {
    let mut board = Board::new();
    board.make_move(mv("a7-b7")).expect("legal extend");
    board.make_move(mv("g7-f6")).expect("legal extend");

    assert_eq!(board.get(sq("f6")), SquareState::Blue);
    assert_eq!(sq("f6"), 84);
    assert_eq!(board.num_pieces(Color::Red), 3);
    assert_eq!(board.num_pieces(Color::Blue), 3);
    assert_eq!(board.side_to_move(), Color::Red);
}

#[test]
fn blocker_is_mirrored_to_all_reflections() {
    let mut board = Board::new();
    board.place_blocker(sq("b7")).expect("b7 is empty");
    for name in ["b7", "b1", "f7", "f1"] {
        assert_eq!(board.get(sq(name)), SquareState::Blocked, "{name}");
    }
    assert_eq!(board.num_blockers(), 4);
    assert_eq!(
        board.count_cells(SquareState::Blocked),
        NUM_CELLS - NUM_PLAYABLE + 4
    );
}

#[test]
fn start_position_is_live() {
    let board = Board::new();
    assert!(board.can_move(Color::Red));
    assert!(board.can_move(Color::Blue));
    assert!(!board.is_game_over());
}

#[test]
fn depth_four_search_plays_and_leaves_board_alone() {
    let board = Board::new();
    let before = board.clone();
    let result = search_best_move(&board, &MaterialScorer, SearchConfig { max_depth: 4 })
        .expect("search should run");

    assert!(!result.best_move.is_pass());
    assert!(result.best_move.is_extend() || result.best_move.is_jump());
    assert!(board.is_legal(result.best_move));
    assert_eq!(board, before);
}

#[test]
fn red_wiped_out_means_blue_wins() {
    let mut board = Board::new();
    board.set_piece(sq("a7"), None).expect("editable");
    board.set_piece(sq("g1"), None).expect("editable");

    assert_eq!(board.num_pieces(Color::Red), 0);
    assert!(board.is_game_over());
    assert_eq!(Outcome::from_board(&board).to_string(), "Blue wins.");
}

#[test]
fn clear_is_idempotent() {
    let mut board = Board::new();
    board.make_move(mv("a7-c5")).expect("legal jump");
    board.place_blocker(sq("d4")).expect("center is empty");
    board.clear();
    let once = board.clone();
    board.clear();
    assert_eq!(board, once);
    assert_eq!(board, Board::new());
}

#[test]
fn distance_and_ownership_boundaries() {
    let board = Board::new();
    // Distance three or more.
    assert!(!board.is_legal(mv("a7-d7")));
    assert!(!board.is_legal(mv("a7-a4")));
    // Distance zero.
    assert!(!board.is_legal(Move::new(sq("a7"), sq("a7"))));
    // Source not owned by the side to move.
    assert!(!board.is_legal(mv("g7-f7")));
    assert!(!board.is_legal(mv("d4-d5")));
    // Pass while moves exist.
    assert!(!board.is_legal(Move::Pass));

    let mut copy = board.clone();
    let err = copy.make_move(mv("a7-d7")).expect_err("too far");
    assert!(matches!(err, AtaxxError::IllegalMove(_)));
    assert_eq!(copy, board);
}

#[test]
fn border_cells_are_never_playable() {
    let board = Board::new();
    let border = (0..NUM_CELLS).filter(|&sq| !grid::is_playable(sq)).count();
    assert_eq!(border, NUM_CELLS - NUM_PLAYABLE);
    for cell in (0..NUM_CELLS).filter(|&sq| !grid::is_playable(sq)) {
        assert_eq!(board.get(cell), SquareState::Blocked);
    }
    let err = Board::new()
        .place_blocker(grid::index(0, 0) - 1)
        .expect_err("border cell");
    assert!(matches!(err, AtaxxError::IllegalBlockPlacement(_)));
}
