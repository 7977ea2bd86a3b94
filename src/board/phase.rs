use std::fmt;

use super::side::Side;
use super::{Board, PIECES_PER_SIDE};

/// Stage of the game, derived from how many pieces each side has on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// At least one side still has pieces to place.
    Placement,
    /// Both sides have all of their pieces on the board and relocate them.
    Movement,
}

/// Placement while either side has fewer than four pieces, movement afterwards.
pub fn current_phase(board: &Board) -> Phase {
    if Side::ALL
        .iter()
        .any(|&side| board.count_of(side) < PIECES_PER_SIDE)
    {
        Phase::Placement
    } else {
        Phase::Movement
    }
}

/// The phase `side` itself is in: it keeps placing until its own four pieces
/// are on the board.
pub fn phase_of(board: &Board, side: Side) -> Phase {
    if board.count_of(side) < PIECES_PER_SIDE {
        Phase::Placement
    } else {
        Phase::Movement
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placement => write!(f, "placement"),
            Phase::Movement => write!(f, "movement"),
        }
    }
}
