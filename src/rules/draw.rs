use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::board::signature::PositionSignature;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    MoveLimit,
    Repetition,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::MoveLimit => write!(f, "move limit reached"),
            DrawReason::Repetition => write!(f, "position repeated"),
        }
    }
}

/// Tracks the move cap and a short window of recent positions.
///
/// Only the last `window` signatures are remembered, so a position has to
/// recur `limit` times within that window to count as a repetition.
#[derive(Clone, Debug)]
pub struct DrawDetector {
    max_plies: usize,
    window: usize,
    limit: usize,
    history: VecDeque<PositionSignature>,
    counts: FxHashMap<PositionSignature, usize>,
}

impl DrawDetector {
    pub fn new(max_plies: usize, window: usize, limit: usize) -> Self {
        Self {
            max_plies,
            window,
            limit,
            history: VecDeque::with_capacity(window + 1),
            counts: FxHashMap::default(),
        }
    }

    /// Called after every move that did not win. `ply` is the number of moves
    /// played so far, including the one that produced `signature`.
    pub fn record(&mut self, ply: usize, signature: PositionSignature) -> Option<DrawReason> {
        if ply >= self.max_plies {
            return Some(DrawReason::MoveLimit);
        }

        self.history.push_back(signature);
        let seen = {
            let count = self.counts.entry(signature).or_insert(0);
            *count += 1;
            *count
        };
        if seen >= self.limit {
            return Some(DrawReason::Repetition);
        }

        if self.history.len() > self.window {
            if let Some(evicted) = self.history.pop_front() {
                self.forget(evicted);
            }
        }
        None
    }

    fn forget(&mut self, signature: PositionSignature) {
        if let Some(count) = self.counts.get_mut(&signature) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&signature);
            }
        }
    }

    /// Occurrences of `signature` in the retained window.
    pub fn occurrences(&self, signature: &PositionSignature) -> usize {
        self.counts.get(signature).copied().unwrap_or(0)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coord::Coord;
    use crate::board::side::Side;
    use crate::board::Board;

    fn signature_with(cells: &[(u8, u8)]) -> PositionSignature {
        let mut board = Board::new();
        for &(row, col) in cells {
            board.put(Coord::new(row, col), Side::A).unwrap();
        }
        board.signature()
    }

    #[test]
    fn test_move_limit() {
        let mut detector = DrawDetector::new(30, 10, 3);
        assert_eq!(detector.record(29, signature_with(&[(0, 0)])), None);
        assert_eq!(
            detector.record(30, signature_with(&[(0, 1)])),
            Some(DrawReason::MoveLimit)
        );
    }

    #[test]
    fn test_threefold_repetition_inside_window() {
        let mut detector = DrawDetector::new(30, 10, 3);
        let repeated = signature_with(&[(2, 2)]);
        let other = signature_with(&[(1, 1)]);

        assert_eq!(detector.record(1, repeated), None);
        assert_eq!(detector.record(2, other), None);
        assert_eq!(detector.record(3, repeated), None);
        assert_eq!(detector.occurrences(&repeated), 2);
        assert_eq!(detector.record(4, other), None);
        assert_eq!(detector.record(5, repeated), Some(DrawReason::Repetition));
    }

    #[test]
    fn test_repetition_outside_window_is_forgotten() {
        let mut detector = DrawDetector::new(100, 10, 3);
        let repeated = signature_with(&[(2, 2)]);
        let fillers: Vec<PositionSignature> = Coord::all()
            .take(12)
            .map(|coord| signature_with(&[(coord.row, coord.col), (4, 4)]))
            .collect();

        let mut ply = 0;
        let mut play = |detector: &mut DrawDetector, signature| {
            ply += 1;
            detector.record(ply, signature)
        };

        assert_eq!(play(&mut detector, repeated), None);
        assert_eq!(play(&mut detector, repeated), None);
        for &filler in fillers.iter().take(10) {
            assert_eq!(play(&mut detector, filler), None);
        }
        // The two earlier occurrences have been evicted by now.
        assert_eq!(detector.occurrences(&repeated), 0);
        assert_eq!(detector.history_len(), 10);
        assert_eq!(play(&mut detector, repeated), None);
        assert_eq!(detector.occurrences(&repeated), 1);
    }
}
