use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::BOARD_SIZE;

/// A cell coordinate. Row 0 is the top row, column 0 the leftmost column.
///
/// In text form the column is a letter (`a`..`e`) and the row a number
/// (`1`..`5`), so `a1` is the top-left corner and `c3` the centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

pub const CENTER: Coord = Coord::new(2, 2);

static CELL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-eA-E])([1-5])$").expect("CELL_RE regex should be valid"));

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Builds a coordinate from a row-major cell index (0..25).
    pub fn from_index(index: usize) -> Self {
        Self::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
    }

    pub fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub fn is_on_board(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Iterates every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Coord::from_index)
    }

    /// Returns the coordinate offset by `(dr, dc)`, if it is still on the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Coord> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        let coord = Coord::new(row as u8, col as u8);
        if coord.is_on_board() {
            Some(coord)
        } else {
            None
        }
    }

    /// The (up to 8) on-board cells surrounding this one.
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> {
        const DELTAS: [(i8, i8); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        let origin = *self;
        DELTAS
            .iter()
            .filter_map(move |&(dr, dc)| origin.offset(dr, dc))
    }

    /// Chebyshev adjacency: at most one step in each axis, excluding the cell itself.
    pub fn is_adjacent(&self, other: Coord) -> bool {
        let dr = (self.row as i16 - other.row as i16).abs();
        let dc = (self.col as i16 - other.col as i16).abs();
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }

    pub fn manhattan_distance(&self, other: Coord) -> u8 {
        let dr = (self.row as i16 - other.row as i16).abs();
        let dc = (self.col as i16 - other.col as i16).abs();
        (dr + dc) as u8
    }

    pub fn to_notation(&self) -> String {
        format!("{}{}", (b'a' + self.col) as char, self.row + 1)
    }

    pub fn from_notation(notation: &str) -> Option<Self> {
        let caps = CELL_RE.captures(notation.trim())?;
        let col = caps[1].to_ascii_lowercase().as_bytes()[0] - b'a';
        let row = caps[2].as_bytes()[0] - b'1';
        Some(Coord::new(row, col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}", self.to_notation())
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Coord {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::from_notation(s).ok_or("invalid cell; expected a column a-e and a row 1-5, e.g. c3")
    }
}
