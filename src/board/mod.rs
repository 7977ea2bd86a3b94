pub mod coord;
pub mod error;
pub mod phase;
pub mod side;
pub mod signature;

mod display;


use std::str::FromStr;

use coord::Coord;
use error::BoardError;
use phase::Phase;
use side::Side;
use signature::PositionSignature;

pub const BOARD_SIZE: usize = 5;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const PIECES_PER_SIDE: usize = 4;

/// Occupancy of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece(Side),
}

impl Cell {
    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Piece(side) => Some(*side),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(side) => side.to_char(),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Represents the state of a Teeko board: the occupancy of all 25 cells plus a
/// per-side piece count kept in step with the cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    counts: [usize; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            counts: [0, 0],
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        if !coord.is_on_board() {
            return Cell::Empty;
        }
        self.cells[coord.index()]
    }

    pub fn cell_at(&self, row: u8, col: u8) -> Cell {
        self.cell(Coord::new(row, col))
    }

    pub fn get(&self, coord: Coord) -> Option<Side> {
        self.cell(coord).side()
    }

    pub fn is_empty(&self, coord: Coord) -> bool {
        coord.is_on_board() && self.cells[coord.index()].is_empty()
    }

    pub fn count_of(&self, side: Side) -> usize {
        self.counts[side.index()]
    }

    pub fn total_pieces(&self) -> usize {
        self.counts[0] + self.counts[1]
    }

    /// Coordinates of every piece belonging to `side`, in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&coord| self.cells[coord.index()] == Cell::Piece(side))
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&coord| self.cells[coord.index()].is_empty())
    }

    pub fn phase(&self) -> Phase {
        phase::current_phase(self)
    }

    pub fn phase_of(&self, side: Side) -> Phase {
        phase::phase_of(self, side)
    }

    pub fn signature(&self) -> PositionSignature {
        PositionSignature::new(self.cells)
    }

    pub fn put(&mut self, coord: Coord, side: Side) -> Result<(), BoardError> {
        if !coord.is_on_board() {
            return Err(BoardError::OutOfBounds { coord });
        }
        if !self.cells[coord.index()].is_empty() {
            return Err(BoardError::CellOccupied { coord });
        }
        if self.count_of(side) >= PIECES_PER_SIDE {
            return Err(BoardError::NoPiecesLeft { side });
        }

        self.cells[coord.index()] = Cell::Piece(side);
        self.counts[side.index()] += 1;
        Ok(())
    }

    /// Lifts a piece off the board. Only used by relocations and by undo, so
    /// counts never drop outside of a move's own bookkeeping.
    pub(crate) fn remove(&mut self, coord: Coord) -> Option<Side> {
        if !coord.is_on_board() {
            return None;
        }
        let side = self.cells[coord.index()].side()?;
        self.cells[coord.index()] = Cell::Empty;
        self.counts[side.index()] -= 1;
        Some(side)
    }

    /// Slides the piece on `source` to `dest` without touching the counts.
    pub(crate) fn relocate(
        &mut self,
        source: Coord,
        dest: Coord,
        side: Side,
    ) -> Result<(), BoardError> {
        for coord in [source, dest] {
            if !coord.is_on_board() {
                return Err(BoardError::OutOfBounds { coord });
            }
        }
        if self.get(source) != Some(side) {
            return Err(BoardError::SourceNotOwned {
                coord: source,
                side,
            });
        }
        if !self.is_empty(dest) {
            return Err(BoardError::CellOccupied { coord: dest });
        }

        self.cells[source.index()] = Cell::Empty;
        self.cells[dest.index()] = Cell::Piece(side);
        Ok(())
    }

    /// Compact one-line notation: five rows of `X`, `O` and `.` separated by `/`.
    pub fn to_notation(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(Cell::to_char).collect())
            .collect();
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = notation
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != CELL_COUNT {
            return Err(BoardError::InvalidNotation {
                msg: format!("expected {} cells, got {}", CELL_COUNT, chars.len()),
            });
        }

        let mut board = Board::new();
        for (index, &c) in chars.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let side = Side::from_char(c).ok_or_else(|| BoardError::InvalidNotation {
                msg: format!("unexpected character '{}'", c),
            })?;
            board.put(Coord::from_index(index), side)?;
        }
        Ok(board)
    }
}
