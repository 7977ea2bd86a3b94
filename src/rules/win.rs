use once_cell::sync::Lazy;

use crate::board::coord::Coord;
use crate::board::side::Side;
use crate::board::{Board, BOARD_SIZE};

/// Four cells that, fully owned by one side, win the game.
pub type Window = [Coord; 4];

const WINDOW_LEN: usize = 4;

/// Every straight length-4 line: rows, columns and both diagonal directions.
pub static LINES: Lazy<Vec<Window>> = Lazy::new(|| {
    const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

    let mut lines = Vec::new();
    for &(dr, dc) in DIRECTIONS.iter() {
        for start in Coord::all() {
            let cells: Option<Vec<Coord>> = (0..WINDOW_LEN as i8)
                .map(|step| start.offset(dr * step, dc * step))
                .collect();
            if let Some(cells) = cells {
                lines.push([cells[0], cells[1], cells[2], cells[3]]);
            }
        }
    }
    lines
});

/// Every 2x2 block.
pub static SQUARES: Lazy<Vec<Window>> = Lazy::new(|| {
    let size = BOARD_SIZE as u8;
    let mut squares = Vec::new();
    for row in 0..size - 1 {
        for col in 0..size - 1 {
            squares.push([
                Coord::new(row, col),
                Coord::new(row, col + 1),
                Coord::new(row + 1, col),
                Coord::new(row + 1, col + 1),
            ]);
        }
    }
    squares
});

fn owns_window(board: &Board, side: Side, window: &Window) -> bool {
    window.iter().all(|&coord| board.get(coord) == Some(side))
}

/// The first winning window fully owned by `side`, lines before squares.
pub fn winning_window(board: &Board, side: Side) -> Option<Window> {
    LINES
        .iter()
        .chain(SQUARES.iter())
        .find(|window| owns_window(board, side, window))
        .copied()
}

pub fn has_win(board: &Board, side: Side) -> bool {
    winning_window(board, side).is_some()
}
