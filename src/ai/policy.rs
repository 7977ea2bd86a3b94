use std::fmt;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::alpha_beta_searcher::SearchContext;
use crate::board::side::Side;
use crate::board::Board;
use crate::move_generator::{legal_moves, MoveError};
use crate::teeko_move::Move;
use crate::teeko_search::{find_immediate_win_or_block, search_best_move};

use super::difficulty::DifficultySettings;

/// How the computer arrived at its move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionKind {
    /// Wins on the spot, or blocks an immediate win of the opponent.
    Immediate,
    /// A deliberate random move, rolled against the mistake probability.
    Mistake,
    Search,
    /// The search came back without a move.
    Fallback,
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DecisionKind::Immediate => "immediate",
            DecisionKind::Mistake => "deliberate mistake",
            DecisionKind::Search => "search",
            DecisionKind::Fallback => "random fallback",
        };
        write!(f, "{}", label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiDecision {
    pub teeko_move: Move,
    pub kind: DecisionKind,
    /// Search score from the mover's perspective, when a search ran.
    pub score: Option<i32>,
}

impl AiDecision {
    fn new(teeko_move: Move, kind: DecisionKind, score: Option<i32>) -> Self {
        Self {
            teeko_move,
            kind,
            score,
        }
    }
}

/// Picks a move for `side` with a fresh sequential search context.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    settings: &DifficultySettings,
    rng: &mut R,
) -> Result<AiDecision, MoveError> {
    let mut context = SearchContext::new(settings.search_depth);
    choose_move_with_context(&mut context, board, side, settings, rng)
}

/// Picks a move for `side`:
/// 1. an immediate win or block,
/// 2. else, with the configured probability, a uniformly random legal move,
/// 3. else the search result, or a random legal move if the search has none.
///
/// The context's depth is overwritten with the settings' depth; its
/// parallelism and statistics are kept for the caller.
pub fn choose_move_with_context<R: Rng + ?Sized>(
    context: &mut SearchContext,
    board: &Board,
    side: Side,
    settings: &DifficultySettings,
    rng: &mut R,
) -> Result<AiDecision, MoveError> {
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return Err(MoveError::NoLegalMoves { side });
    }

    if let Some(teeko_move) = find_immediate_win_or_block(board, side) {
        return Ok(AiDecision::new(teeko_move, DecisionKind::Immediate, None));
    }

    let random_move = |rng: &mut R| {
        moves
            .choose(rng)
            .copied()
            .ok_or(MoveError::NoLegalMoves { side })
    };

    if rng.gen::<f64>() < settings.mistake_probability {
        let teeko_move = random_move(rng)?;
        debug!("{} plays a deliberate mistake: {}", side, teeko_move);
        return Ok(AiDecision::new(teeko_move, DecisionKind::Mistake, None));
    }

    context.set_search_depth(settings.search_depth);
    let outcome = search_best_move(context, board, side, side)?;
    debug!(
        "{} searched {} positions at depth {}: {:?} ({})",
        side,
        context.searched_position_count(),
        settings.search_depth,
        outcome.best_move,
        outcome.score
    );

    match outcome.best_move {
        Some(teeko_move) => Ok(AiDecision::new(
            teeko_move,
            DecisionKind::Search,
            Some(outcome.score),
        )),
        None => {
            let teeko_move = random_move(rng)?;
            Ok(AiDecision::new(
                teeko_move,
                DecisionKind::Fallback,
                Some(outcome.score),
            ))
        }
    }
}
