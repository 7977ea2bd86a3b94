use super::{Cell, CELL_COUNT};

/// Immutable snapshot of every cell on the board, in row-major order.
/// Only ever compared for equality (repetition detection).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositionSignature([Cell; CELL_COUNT]);

impl PositionSignature {
    pub(super) fn new(cells: [Cell; CELL_COUNT]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.0
    }
}
