//! Padded-grid geometry.
//!
//! The 7x7 playing area is stored inside an 11x11 array with a two-cell
//! border of permanently blocked cells. Any square within two columns/rows of
//! a playable square is therefore a valid array index, so neighborhood scans
//! never need bounds checks.
//!
//! Index layout: `index(col, row) = (row + 2) * 11 + (col + 2)` with zero-based
//! `col` (`a` = 0) and `row` (`1` = 0).

/// Number of playable squares on a side.
pub const SIDE: usize = 7;
/// Width of the blocked border on every side.
pub const BORDER: usize = 2;
/// Side length of the padded grid.
pub const EXTENDED_SIDE: usize = SIDE + 2 * BORDER;
/// Number of cells in the padded grid.
pub const NUM_CELLS: usize = EXTENDED_SIDE * EXTENDED_SIDE;
/// Number of playable squares.
pub const NUM_PLAYABLE: usize = SIDE * SIDE;

/// Linear index into the padded grid.
pub type Square = usize;

/// Linear index of the playable square at zero-based `col`, `row`.
#[inline]
pub const fn index(col: usize, row: usize) -> Square {
    (row + BORDER) * EXTENDED_SIDE + (col + BORDER)
}

/// Index of the square `dc` columns and `dr` rows away from `sq`.
///
/// No bounds checks: callers stay within `BORDER` cells of a playable square.
#[inline]
pub const fn neighbor(sq: Square, dc: isize, dr: isize) -> Square {
    (sq as isize + dc + dr * EXTENDED_SIDE as isize) as Square
}

/// Zero-based column of `sq` relative to the playable area (negative or
/// `>= SIDE` inside the border).
#[inline]
pub const fn col_of(sq: Square) -> isize {
    (sq % EXTENDED_SIDE) as isize - BORDER as isize
}

/// Zero-based row of `sq` relative to the playable area.
#[inline]
pub const fn row_of(sq: Square) -> isize {
    (sq / EXTENDED_SIDE) as isize - BORDER as isize
}

/// True iff `sq` lies inside the 7x7 playing area.
#[inline]
pub const fn is_playable(sq: Square) -> bool {
    if sq >= NUM_CELLS {
        return false;
    }
    let col = col_of(sq);
    let row = row_of(sq);
    col >= 0 && col < SIDE as isize && row >= 0 && row < SIDE as isize
}

/// Chebyshev distance (max of column and row deltas) between two squares.
#[inline]
pub const fn distance(a: Square, b: Square) -> usize {
    let dc = (col_of(a) - col_of(b)).unsigned_abs();
    let dr = (row_of(a) - row_of(b)).unsigned_abs();
    if dc > dr {
        dc
    } else {
        dr
    }
}

/// Playable squares in row-major order (`a1`, `b1`, ..., `g7`).
pub fn playable_squares() -> impl Iterator<Item = Square> {
    (0..SIDE).flat_map(|row| (0..SIDE).map(move |col| index(col, row)))
}

/// Offsets of the `(2r+1)^2 - 1` cells around a square, rows outer and
/// columns inner, both ascending. This is the neighborhood scan order used by
/// move generation.
pub fn neighborhood(radius: isize) -> impl Iterator<Item = (isize, isize)> {
    (-radius..=radius)
        .flat_map(move |dr| (-radius..=radius).map(move |dc| (dc, dr)))
        .filter(|&(dc, dr)| dc != 0 || dr != 0)
}
