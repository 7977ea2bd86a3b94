use thiserror::Error;

use super::coord::Coord;
use super::side::Side;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cell {coord} is outside the 5x5 board")]
    OutOfBounds { coord: Coord },
    #[error("Cannot put a piece on cell {coord}, it is already occupied")]
    CellOccupied { coord: Coord },
    #[error("Cannot move from cell {coord}, it does not hold a piece of side {side}")]
    SourceNotOwned { coord: Coord, side: Side },
    #[error("Side {side} already has all of its pieces on the board")]
    NoPiecesLeft { side: Side },
    #[error("Cannot undo move, cell {coord} does not hold the moved piece")]
    UndoMismatch { coord: Coord },
    #[error("Invalid board notation: {msg}")]
    InvalidNotation { msg: String },
}
