//! Square conversions between text coordinates and padded-grid indices.
//!
//! Columns are `a`..`g` and rows `1`..`7`; `a1` is the lower-left square.

use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::grid::{self, Square, SIDE};

/// Convert text (for example: "c5") to a padded-grid index.
#[inline]
pub fn parse_square(text: &str) -> AtaxxResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(AtaxxError::InvalidSquare(text.to_owned()));
    }

    let (col, row) = (bytes[0], bytes[1]);
    if !(b'a'..b'a' + SIDE as u8).contains(&col) || !(b'1'..b'1' + SIDE as u8).contains(&row) {
        return Err(AtaxxError::InvalidSquare(text.to_owned()));
    }

    Ok(grid::index((col - b'a') as usize, (row - b'1') as usize))
}

/// Convert a playable square to text (for example: "c5"). Border cells have no
/// name.
#[inline]
pub fn square_to_algebraic(sq: Square) -> Option<String> {
    if !grid::is_playable(sq) {
        return None;
    }
    let col = char::from(b'a' + grid::col_of(sq) as u8);
    let row = char::from(b'1' + grid::row_of(sq) as u8);
    Some(format!("{col}{row}"))
}
