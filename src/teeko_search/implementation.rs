//! Teeko-specific trait implementations for the alpha-beta search.

use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameState, MoveGenerator, SearchContext, SearchError,
    SearchOutcome,
};
use crate::board::error::BoardError;
use crate::board::side::Side;
use crate::board::Board;
use crate::evaluate::{self, WIN_SCORE};
use crate::move_generator::legal_moves;
use crate::rules::win::has_win;
use crate::teeko_move::{Move, MoveList};

use super::move_orderer::TeekoMoveOrderer;

/// A board seen from a fixed side. Scores are always relative to
/// `perspective`, which is the maximizing player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeekoPosition {
    pub board: Board,
    pub to_move: Side,
    pub perspective: Side,
}

impl TeekoPosition {
    pub fn new(board: Board, to_move: Side, perspective: Side) -> Self {
        Self {
            board,
            to_move,
            perspective,
        }
    }
}

impl GameState for TeekoPosition {
    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.to_move == self.perspective
    }

    #[inline]
    fn toggle_turn(&mut self) {
        self.to_move = self.to_move.opposite();
    }
}

impl GameMove for Move {
    type State = TeekoPosition;
    type Error = BoardError;

    #[inline]
    fn apply(&self, state: &mut TeekoPosition) -> Result<(), BoardError> {
        Move::apply(self, &mut state.board, state.to_move)
    }

    #[inline]
    fn undo(&self, state: &mut TeekoPosition) -> Result<(), BoardError> {
        Move::undo(self, &mut state.board)
    }
}

#[derive(Clone, Default)]
pub struct TeekoMoveGenerator;

impl MoveGenerator<TeekoPosition> for TeekoMoveGenerator {
    type Move = Move;
    type MoveList = MoveList;

    #[inline]
    fn generate_moves(&self, state: &mut TeekoPosition) -> MoveList {
        legal_moves(&state.board, state.to_move)
    }
}

/// Wins found closer to the root score higher, losses found closer to the
/// root score lower, so the search prefers quick wins and slow losses.
#[derive(Clone, Default)]
pub struct TeekoEvaluator;

impl Evaluator<TeekoPosition> for TeekoEvaluator {
    #[inline]
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    fn evaluate(&self, state: &mut TeekoPosition, _remaining_depth: u8) -> i32 {
        evaluate::score(&state.board, state.perspective)
    }

    fn terminal_score(&self, state: &mut TeekoPosition, remaining_depth: u8) -> Option<i32> {
        let decided = WIN_SCORE + remaining_depth as i32;
        if has_win(&state.board, state.perspective) {
            return Some(decided);
        }
        if has_win(&state.board, state.perspective.opposite()) {
            return Some(-decided);
        }
        None
    }

    /// A player who cannot move loses.
    fn no_moves_score(&self, state: &mut TeekoPosition, remaining_depth: u8) -> i32 {
        let decided = WIN_SCORE + remaining_depth as i32;
        if state.is_maximizing_player() {
            -decided
        } else {
            decided
        }
    }
}

/// Searches for the best move of `side` with the context's depth and
/// parallelism. The returned score is relative to `perspective`.
#[must_use = "search returns the best move found"]
pub fn search_best_move(
    context: &mut SearchContext,
    board: &Board,
    side: Side,
    perspective: Side,
) -> Result<SearchOutcome<Move>, SearchError> {
    let mut position = TeekoPosition::new(board.clone(), side, perspective);

    alpha_beta_search(
        context,
        &mut position,
        &TeekoMoveGenerator,
        &TeekoEvaluator,
        &TeekoMoveOrderer,
    )
}

/// Sequential search of `depth` plies for `side`, scored for `perspective`.
pub fn best_move(
    board: &Board,
    side: Side,
    depth: u8,
    perspective: Side,
) -> Result<SearchOutcome<Move>, SearchError> {
    let mut context = SearchContext::new(depth);
    search_best_move(&mut context, board, side, perspective)
}

/// A move that wins on the spot for `side`. Failing that, a move of `side`
/// onto a cell the opponent could win on next turn; opponent threats are tried
/// in generation order until one of them can be occupied.
pub fn find_immediate_win_or_block(board: &Board, side: Side) -> Option<Move> {
    let own_moves = legal_moves(board, side);

    let wins_for = |teeko_move: &Move, mover: Side| {
        board
            .with_move_applied(*teeko_move, mover)
            .map(|next| has_win(&next, mover))
            .unwrap_or(false)
    };

    if let Some(winning) = own_moves.iter().find(|m| wins_for(*m, side)) {
        debug!("{} wins immediately with {}", side, winning);
        return Some(*winning);
    }

    let opponent = side.opposite();
    let block = legal_moves(board, opponent)
        .iter()
        .filter(|threat| wins_for(*threat, opponent))
        .find_map(|threat| {
            own_moves
                .iter()
                .find(|m| m.dest() == threat.dest())
                .copied()
        });

    if let Some(block) = block {
        debug!("{} blocks with {}", side, block);
    }
    block
}
