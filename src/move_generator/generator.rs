use std::collections::BTreeSet;

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::coord::Coord;
use crate::board::phase::Phase;
use crate::board::side::Side;
use crate::board::Board;
use crate::teeko_move::{Move, MoveList};

use super::error::MoveError;

/// A side places pieces until all four are on the board, then relocates them.
#[inline]
fn side_is_placing(board: &Board, side: Side) -> bool {
    board.phase_of(side) == Phase::Placement
}

/// Enumerates every legal move for `side`.
///
/// While `side` still has pieces to place this is one placement per empty cell.
/// Afterwards it is one relocation per (own piece, empty neighbour) pair.
/// Returns an empty list when the side is boxed in.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn legal_moves(board: &Board, side: Side) -> MoveList {
    let mut moves = MoveList::new();

    if side_is_placing(board, side) {
        moves.extend(board.empty_cells().map(Move::place));
        return moves;
    }

    for source in board.pieces(side) {
        for dest in source.neighbors() {
            if board.is_empty(dest) {
                moves.push(Move::relocate(source, dest));
            }
        }
    }
    moves
}

/// Cheaper than `legal_moves(..).is_empty()` when only existence matters.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    if side_is_placing(board, side) {
        return board.empty_cells().next().is_some();
    }
    board
        .pieces(side)
        .any(|source| source.neighbors().any(|dest| board.is_empty(dest)))
}

/// Every cell `side` could occupy with its next move.
pub fn legal_destinations(board: &Board, side: Side) -> BTreeSet<Coord> {
    legal_moves(board, side)
        .iter()
        .map(|teeko_move| teeko_move.dest())
        .collect()
}

/// Cells the piece on `source` may slide to. Empty if `source` holds no piece
/// or its owner is still placing.
pub fn legal_destinations_for_source(board: &Board, source: Coord) -> BTreeSet<Coord> {
    match board.get(source) {
        Some(side) if !side_is_placing(board, side) => source
            .neighbors()
            .filter(|&dest| board.is_empty(dest))
            .collect(),
        _ => BTreeSet::new(),
    }
}

/// Checks `teeko_move` against the rules for `side` without touching the board.
pub fn validate_move(board: &Board, side: Side, teeko_move: &Move) -> Result<(), MoveError> {
    let dest = teeko_move.dest();
    for coord in teeko_move.source().into_iter().chain(Some(dest)) {
        if !coord.is_on_board() {
            return Err(MoveError::OutOfBounds { coord });
        }
    }

    if teeko_move.is_placement() != side_is_placing(board, side) {
        return Err(MoveError::WrongPhaseForMoveKind {
            phase: board.phase_of(side),
        });
    }

    if let Some(source) = teeko_move.source() {
        if board.get(source) != Some(side) {
            return Err(MoveError::SourceNotOwnedByMover {
                coord: source,
                side,
            });
        }
    }

    if !board.is_empty(dest) {
        return Err(MoveError::DestinationOccupied { coord: dest });
    }

    if let Some(source) = teeko_move.source() {
        if !source.is_adjacent(dest) {
            return Err(MoveError::NotAdjacent { from: source, dest });
        }
    }

    Ok(())
}
