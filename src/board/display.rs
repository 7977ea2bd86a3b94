use super::{Board, BOARD_SIZE};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    a   b   c   d   e")?;
        writeln!(f, "  ┌───┬───┬───┬───┬───┐")?;
        for row in 0..BOARD_SIZE as u8 {
            write!(f, "{} │", row + 1)?;
            for col in 0..BOARD_SIZE as u8 {
                let c = match self.cell_at(row, col).side() {
                    Some(side) => side.to_char(),
                    None => '·',
                };
                write!(f, " {} │", c)?;
            }
            writeln!(f, " {}", row + 1)?;
            if (row as usize) < BOARD_SIZE - 1 {
                writeln!(f, "  ├───┼───┼───┼───┼───┤")?;
            } else {
                writeln!(f, "  └───┴───┴───┴───┴───┘")?;
            }
        }
        write!(f, "    a   b   c   d   e")
    }
}

/// Builds a board from a 5x5 picture, top row first. `X` is side A, `O` is
/// side B and `.` is an empty cell.
///
/// ```ignore
/// let board = teeko_position! {
///     X....
///     .O...
///     ..X..
///     .....
///     .....
/// };
/// ```
#[macro_export]
macro_rules! teeko_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(cells.len(), 25, "Invalid number of cells. Expected 25, got {}", cells.len());
        for (i, &c) in cells.iter().enumerate() {
            if c != '.' {
                let side = $crate::board::side::Side::from_char(c)
                    .expect("Invalid character in teeko position");
                board
                    .put($crate::board::coord::Coord::from_index(i), side)
                    .expect("teeko position must be a legal board");
            }
        }
        board
    }};
}
