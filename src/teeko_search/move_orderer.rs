//! Teeko move ordering for improved alpha-beta pruning.

use std::cmp::Reverse;

use crate::alpha_beta_searcher::MoveOrderer;
use crate::board::coord::CENTER;
use crate::teeko_move::Move;

use super::implementation::TeekoPosition;

// One friendly neighbour is worth 1.2 steps towards the centre.
const CENTER_STEP_WEIGHT: i32 = 10;
const ALLY_NEIGHBOR_WEIGHT: i32 = 12;

/// Prefers destinations close to the centre and next to the mover's own
/// pieces. The sort is stable, so equally rated moves keep generation order.
#[derive(Clone, Default, Debug)]
pub struct TeekoMoveOrderer;

impl MoveOrderer<TeekoPosition, Move> for TeekoMoveOrderer {
    #[inline]
    fn order_moves(&self, moves: &mut [Move], state: &TeekoPosition) {
        moves.sort_by_key(|teeko_move| Reverse(move_priority(teeko_move, state)));
    }
}

/// Rated on the board before the move, so a relocating piece counts as a
/// neighbour of its own destination.
pub(super) fn move_priority(teeko_move: &Move, state: &TeekoPosition) -> i32 {
    let dest = teeko_move.dest();
    let distance = dest.manhattan_distance(CENTER) as i32;
    let allies = dest
        .neighbors()
        .filter(|&neighbor| state.board.get(neighbor) == Some(state.to_move))
        .count() as i32;

    ALLY_NEIGHBOR_WEIGHT * allies - CENTER_STEP_WEIGHT * distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coord::Coord;
    use crate::board::side::Side;
    use crate::board::Board;
    use crate::teeko_position;

    #[test]
    fn test_center_first_on_empty_board() {
        let state = TeekoPosition::new(Board::new(), Side::A, Side::A);
        let mut moves: Vec<Move> = Coord::all().map(Move::place).collect();
        TeekoMoveOrderer.order_moves(&mut moves, &state);

        assert_eq!(moves[0], Move::place(CENTER));
        // The four orthogonal neighbours of the centre come next, in row-major order.
        assert_eq!(
            &moves[1..5],
            &[
                Move::place(Coord::new(1, 2)),
                Move::place(Coord::new(2, 1)),
                Move::place(Coord::new(2, 3)),
                Move::place(Coord::new(3, 2)),
            ]
        );
        assert_eq!(moves.len(), 25);
    }

    #[test]
    fn test_allies_outweigh_one_step() {
        let board = teeko_position! {
            X....
            .....
            .....
            .....
            .....
        };
        let state = TeekoPosition::new(board, Side::A, Side::A);
        // b2 is two steps out with one ally: 12 - 20 = -8.
        // c2 is one step out with none: -10.
        assert_eq!(move_priority(&Move::place(Coord::new(1, 1)), &state), -8);
        assert_eq!(move_priority(&Move::place(Coord::new(1, 2)), &state), -10);

        // Opponent pieces are not allies.
        let opponent = TeekoPosition::new(state.board.clone(), Side::B, Side::A);
        assert_eq!(move_priority(&Move::place(Coord::new(1, 1)), &opponent), -20);
    }
}
