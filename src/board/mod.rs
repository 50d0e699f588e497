//! Board representation for Pente

pub mod board;
pub mod grid;
pub mod scan;

#[cfg(test)]
mod tests;

use std::fmt;

// Re-exports
pub use board::Board;
pub use grid::Grid;
pub use scan::{count_run, scan_directional, Direction, Sequence};

/// Board size (19x19)
pub const BOARD_SIZE: usize = 19;

/// Contents of a single intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    White,
    Black,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Character used by save files ('O' is an empty intersection)
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Stone::Empty => 'O',
            Stone::White => 'W',
            Stone::Black => 'B',
        }
    }

    #[inline]
    pub fn from_char(c: char) -> Option<Stone> {
        match c.to_ascii_uppercase() {
            'O' => Some(Stone::Empty),
            'W' => Some(Stone::White),
            'B' => Some(Stone::Black),
            _ => None,
        }
    }

    /// The side owning this stone, `None` for an empty intersection
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Stone::White => Some(Side::White),
            Stone::Black => Some(Side::Black),
            Stone::Empty => None,
        }
    }
}

/// One of the two players' colors. White always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Side::White => Stone::White,
            Side::Black => Stone::Black,
        }
    }
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        side.stone()
    }
}

/// Position on the board.
///
/// Row 0 is the bottom row (label row "1"), column 0 is column "A".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, u32::from(self.row) + 1)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// Why a move label could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePosError {
    #[display("label must be 2 or 3 characters long")]
    Length,
    #[display("column must be a letter")]
    Column,
    #[display("row must be a number")]
    Row,
}

/// Parse a label such as `J10` into raw `(row, col)` indices.
///
/// The indices are not range-checked: `A0` parses to `(-1, 0)` and it is up to
/// the board to reject coordinates that fall outside the grid.
pub fn parse_label(label: &str) -> Result<(i32, i32), ParsePosError> {
    let len = label.chars().count();
    if !(2..=3).contains(&len) {
        return Err(ParsePosError::Length);
    }

    let mut chars = label.chars();
    let column = chars.next().ok_or(ParsePosError::Length)?;
    let digits = chars.as_str();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParsePosError::Row);
    }
    if !column.is_ascii_alphabetic() {
        return Err(ParsePosError::Column);
    }

    let row: i32 = digits.parse().map_err(|_| ParsePosError::Row)?;
    let col = i32::from(column.to_ascii_uppercase() as u8 - b'A');
    Ok((row - 1, col))
}
