//! Plain-text board renderers.
//!
//! `render_board` draws a legend-framed view for terminals and debugging;
//! `render_dump` produces the bare `===`-delimited block the `dump` command
//! prints.

use crate::game_state::board::Board;
use crate::game_state::grid::SIDE;

const COLUMN_LEGEND: &str = "  a b c d e f g";

/// Render the board with column letters above and below and row numbers on
/// both sides. Row 7 is printed first.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(COLUMN_LEGEND);
    out.push('\n');

    for row in (0..SIDE).rev() {
        let label = char::from(b'1' + row as u8);
        out.push(label);
        out.push(' ');
        push_row(&mut out, board, row);
        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str(COLUMN_LEGEND);
    out
}

/// Render the `===` framed dump: one line per row, each indented by two
/// spaces, row 7 first.
pub fn render_dump(board: &Board) -> String {
    let mut out = String::from("===\n");
    for row in (0..SIDE).rev() {
        out.push_str("  ");
        push_row(&mut out, board, row);
        out.push('\n');
    }
    out.push_str("===");
    out
}

fn push_row(out: &mut String, board: &Board, row: usize) {
    for col in 0..SIDE {
        out.push(board.get_at(col, row).to_char());
        if col + 1 < SIDE {
            out.push(' ');
        }
    }
}
