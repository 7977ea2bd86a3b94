use thiserror::Error;

use crate::alpha_beta_searcher::SearchError;
use crate::board::coord::Coord;
use crate::board::error::BoardError;
use crate::board::phase::Phase;
use crate::board::side::Side;

/// Reasons a move is refused. Every check runs before anything is mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {coord} is outside the 5x5 board")]
    OutOfBounds { coord: Coord },
    #[error("that kind of move is not allowed during the {phase} phase")]
    WrongPhaseForMoveKind { phase: Phase },
    #[error("cell {coord} is not empty")]
    DestinationOccupied { coord: Coord },
    #[error("cell {coord} does not hold a piece of side {side}")]
    SourceNotOwnedByMover { coord: Coord, side: Side },
    #[error("cell {dest} is not adjacent to {from}")]
    NotAdjacent { from: Coord, dest: Coord },
    #[error("the game is already over")]
    GameAlreadyTerminal,
    #[error("side {side} has no legal moves")]
    NoLegalMoves { side: Side },
    #[error("side {side} is not played by the computer")]
    NotComputerTurn { side: Side },
    #[error("side {side} is played by the computer")]
    NotHumanTurn { side: Side },
    #[error("board error: {0}")]
    Board(#[from] BoardError),
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}
