//! Basic value types shared by the board, move generation and search.

use std::fmt;

/// A player. Red always moves first after a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
        }
    }

    /// Parse `red` / `blue` (any case).
    pub fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("red") {
            Some(Color::Red)
        } else if text.eq_ignore_ascii_case("blue") {
            Some(Color::Blue)
        } else {
            None
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of one cell of the padded grid.
///
/// `Blocked` covers both the border padding and blockers placed during setup;
/// neither ever changes once set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SquareState {
    #[default]
    Empty,
    Red,
    Blue,
    Blocked,
}

impl SquareState {
    /// The player owning this cell, if it holds a piece.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            SquareState::Red => Some(Color::Red),
            SquareState::Blue => Some(Color::Blue),
            SquareState::Empty | SquareState::Blocked => None,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, SquareState::Empty)
    }

    /// Single-character form used by the board dump.
    pub const fn to_char(self) -> char {
        match self {
            SquareState::Empty => '-',
            SquareState::Red => 'r',
            SquareState::Blue => 'b',
            SquareState::Blocked => 'X',
        }
    }
}

impl From<Color> for SquareState {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::Red => SquareState::Red,
            Color::Blue => SquareState::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, SquareState};

    #[test]
    fn opposite_swaps_players() {
        assert_eq!(Color::Red.opposite(), Color::Blue);
        assert_eq!(Color::Blue.opposite(), Color::Red);
    }

    #[test]
    fn square_state_color_only_for_pieces() {
        assert_eq!(SquareState::from(Color::Blue).color(), Some(Color::Blue));
        assert_eq!(SquareState::Blocked.color(), None);
        assert_eq!(SquareState::Empty.color(), None);
    }

    #[test]
    fn color_parse_is_case_insensitive() {
        assert_eq!(Color::parse("RED"), Some(Color::Red));
        assert_eq!(Color::parse("blue"), Some(Color::Blue));
        assert_eq!(Color::parse("green"), None);
    }
}
