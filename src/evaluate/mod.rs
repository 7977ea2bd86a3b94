//! Static position evaluation.

use crate::board::coord::{Coord, CENTER};
use crate::board::side::Side;
use crate::board::Board;
use crate::rules::win::{has_win, Window, LINES};

// Larger than any sum of sequence and centre scores, so a won position always
// dominates the heuristic terms.
pub const WIN_SCORE: i32 = 100_000;

const FOUR_IN_LINE: i32 = 10_000;
const THREE_AND_EMPTY: i32 = 300;
const TWO_AND_TWO_EMPTY: i32 = 60;
const ONE_AND_THREE_EMPTY: i32 = 5;

/// Scores `board` from `perspective`'s point of view. Positive is good for
/// `perspective`.
pub fn score(board: &Board, perspective: Side) -> i32 {
    let opponent = perspective.opposite();

    if has_win(board, perspective) {
        return WIN_SCORE;
    }
    if has_win(board, opponent) {
        return -WIN_SCORE;
    }

    sequence_score(board, perspective) - sequence_score(board, opponent)
        + center_bias(board, perspective)
        - center_bias(board, opponent)
}

fn line_value(board: &Board, side: Side, line: &Window) -> i32 {
    let own = line.iter().filter(|&&c| board.get(c) == Some(side)).count();
    let empty = line.iter().filter(|&&c| board.is_empty(c)).count();

    match (own, empty) {
        (4, _) => FOUR_IN_LINE,
        (3, 1) => THREE_AND_EMPTY,
        (2, 2) => TWO_AND_TWO_EMPTY,
        (1, 3) => ONE_AND_THREE_EMPTY,
        _ => 0,
    }
}

/// Sum over every straight length-4 line of how promising it is for `side`.
/// Lines shared with an opponent piece are worth nothing. 2x2 blocks are not
/// counted here.
pub fn sequence_score(board: &Board, side: Side) -> i32 {
    LINES.iter().map(|line| line_value(board, side, line)).sum()
}

/// Per piece, `3 - manhattan distance to the centre`, floored at zero.
pub fn center_bias(board: &Board, side: Side) -> i32 {
    board
        .pieces(side)
        .map(|coord: Coord| (3 - coord.manhattan_distance(CENTER) as i32).max(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teeko_position;

    #[test]
    fn test_empty_board_is_neutral() {
        let board = Board::new();
        assert_eq!(score(&board, Side::A), 0);
        assert_eq!(score(&board, Side::B), 0);
    }

    #[test]
    fn test_center_piece_favors_its_owner() {
        let board = teeko_position! {
            O....
            .....
            ..X..
            .....
            .....
        };
        assert!(score(&board, Side::A) > score(&board, Side::B));
        assert_eq!(center_bias(&board, Side::A), 3);
        assert_eq!(center_bias(&board, Side::B), 0);
    }

    #[test]
    fn test_score_is_antisymmetric() {
        let board = teeko_position! {
            X..O.
            .X...
            ..OX.
            .O...
            .....
        };
        assert_eq!(score(&board, Side::A), -score(&board, Side::B));
    }

    #[test]
    fn test_win_scores() {
        let board = teeko_position! {
            XXXX.
            .....
            ..O..
            .O...
            O....
        };
        assert_eq!(score(&board, Side::A), WIN_SCORE);
        assert_eq!(score(&board, Side::B), -WIN_SCORE);
    }

    #[test]
    fn test_square_win_scores() {
        let board = teeko_position! {
            .....
            .OO..
            .OO..
            .....
            X...X
        };
        assert_eq!(score(&board, Side::B), WIN_SCORE);
    }

    #[test]
    fn test_sequence_score_single_corner_piece() {
        // A corner sits on one row line, one column line and one diagonal.
        let board = teeko_position! {
            X....
            .....
            .....
            .....
            .....
        };
        assert_eq!(sequence_score(&board, Side::A), 3 * ONE_AND_THREE_EMPTY);
    }

    #[test]
    fn test_sequence_score_blocked_lines() {
        let board = teeko_position! {
            XXXO.
            .....
            .....
            .....
            .....
        };
        // Row 1 from a: XXXO blocked. Row 1 from b: XXO. blocked.
        let row_value = 0;
        // Columns a, b, c: one own piece in the top window each.
        let column_value = 3 * ONE_AND_THREE_EMPTY;
        // Diagonals starting at a1 and b1 going down-right. No down-left
        // diagonal passes through an X.
        let diagonal_down_right = 2 * ONE_AND_THREE_EMPTY;
        let expected = row_value + column_value + diagonal_down_right;
        assert_eq!(sequence_score(&board, Side::A), expected);
    }

    #[test]
    fn test_three_in_line_values() {
        let board = teeko_position! {
            .....
            .XXX.
            .....
            .....
            .....
        };
        // Row 2: ".XXX" and "XXX." are both three plus an empty.
        let row_lines = 2 * THREE_AND_EMPTY;
        assert!(sequence_score(&board, Side::A) > row_lines);
    }
}
