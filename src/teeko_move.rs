//! The two kinds of Teeko moves and how they are applied to (and undone from) a board.

use std::fmt;

use smallvec::SmallVec;

use crate::board::coord::Coord;
use crate::board::error::BoardError;
use crate::board::side::Side;
use crate::board::Board;

/// Upper bound on legal moves in a position: 4 pieces with 8 neighbours each.
pub const MAX_MOVES: usize = 32;

pub type MoveList = SmallVec<[Move; MAX_MOVES]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Drop a new piece on an empty cell. Only legal during the placement phase.
    Placement { dest: Coord },
    /// Slide one of the mover's pieces to an adjacent empty cell. Only legal
    /// during the movement phase.
    Relocation { source: Coord, dest: Coord },
}

impl Move {
    pub fn place(dest: Coord) -> Self {
        Move::Placement { dest }
    }

    pub fn relocate(source: Coord, dest: Coord) -> Self {
        Move::Relocation { source, dest }
    }

    pub fn dest(&self) -> Coord {
        match self {
            Move::Placement { dest } | Move::Relocation { dest, .. } => *dest,
        }
    }

    pub fn source(&self) -> Option<Coord> {
        match self {
            Move::Placement { .. } => None,
            Move::Relocation { source, .. } => Some(*source),
        }
    }

    pub fn is_placement(&self) -> bool {
        matches!(self, Move::Placement { .. })
    }

    /// Applies the move for `side`. The board is left untouched on error.
    pub fn apply(&self, board: &mut Board, side: Side) -> Result<(), BoardError> {
        match *self {
            Move::Placement { dest } => board.put(dest, side),
            Move::Relocation { source, dest } => board.relocate(source, dest, side),
        }
    }

    /// Reverts a move previously applied with [`Move::apply`]. The owner of the
    /// moved piece is read back from the board.
    pub fn undo(&self, board: &mut Board) -> Result<(), BoardError> {
        match *self {
            Move::Placement { dest } => board
                .remove(dest)
                .map(|_| ())
                .ok_or(BoardError::UndoMismatch { coord: dest }),
            Move::Relocation { source, dest } => {
                let side = board
                    .get(dest)
                    .ok_or(BoardError::UndoMismatch { coord: dest })?;
                board.relocate(dest, source, side)
            }
        }
    }
}

impl Board {
    /// Returns a copy of this board with `teeko_move` applied for `side`;
    /// `self` is never modified.
    pub fn with_move_applied(&self, teeko_move: Move, side: Side) -> Result<Board, BoardError> {
        let mut next = self.clone();
        teeko_move.apply(&mut next, side)?;
        Ok(next)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Placement { dest } => write!(f, "{}", dest),
            Move::Relocation { source, dest } => write!(f, "{}-{}", source, dest),
        }
    }
}
