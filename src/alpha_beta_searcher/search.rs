//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Moves that fall outside this window can be
//! pruned without affecting the final result. The algorithm guarantees finding the same move as
//! minimax but explores fewer nodes.
//!
//! Best moves are only replaced by a strictly better score, so among equally scored moves the
//! first one in (ordered) generation order wins. A pruned subtree never reports a score strictly
//! better than the bound that pruned it, which keeps the chosen move identical to plain minimax.
//!
//! ## Parallel Search
//! Root moves can be searched in parallel. Each root move then gets its own full window and the
//! results are reduced in move order, so the outcome matches the sequential search.

use std::cmp::{max, min};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, MoveOrderer};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("failed to apply or undo a move during search: {reason}")]
    MoveApplication { reason: String },
}

/// Result of a search: the move to play (if the root had one to choose) and
/// the minimax score of the root from the maximizing player's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    pub best_move: Option<M>,
    pub score: i32,
}

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
    parallel: bool,
}

impl SearchConfig {
    fn new(depth: u8, parallel: bool) -> Self {
        Self { depth, parallel }
    }
}

/// Statistics collected during search.
struct SearchStats {
    position_count: AtomicUsize,
    cutoffs: AtomicUsize,
    move_gen_calls: AtomicUsize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            position_count: AtomicUsize::new(0),
            cutoffs: AtomicUsize::new(0),
            move_gen_calls: AtomicUsize::new(0),
            last_score: None,
            last_duration: None,
        }
    }

    fn increment(&self) {
        self.position_count.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_cutoffs(&self) {
        self.cutoffs.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_move_gen(&self) {
        self.move_gen_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn reset(&mut self) {
        self.last_score = None;
        self.last_duration = None;
        self.position_count.store(0, Ordering::SeqCst);
        self.cutoffs.store(0, Ordering::SeqCst);
        self.move_gen_calls.store(0, Ordering::SeqCst);
    }

    fn record_result(&mut self, score: i32, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }

    fn count(&self) -> usize {
        self.position_count.load(Ordering::SeqCst)
    }

    fn cutoffs(&self) -> usize {
        self.cutoffs.load(Ordering::SeqCst)
    }

    fn move_gen_calls(&self) -> usize {
        self.move_gen_calls.load(Ordering::SeqCst)
    }
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self::with_parallel(depth, false)
    }

    pub fn with_parallel(depth: u8, parallel: bool) -> Self {
        Self {
            config: SearchConfig::new(depth, parallel),
            stats: SearchStats::new(),
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.count()
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs()
    }

    pub fn move_gen_calls(&self) -> usize {
        self.stats.move_gen_calls()
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    fn increment_position_count(&self) {
        self.stats.increment();
    }

    fn increment_cutoffs(&self) {
        self.stats.increment_cutoffs();
    }

    fn increment_move_gen(&self) {
        self.stats.increment_move_gen();
    }
}

/// What a node turns into once it has been visited: either a score without
/// looking further, or the ordered list of moves to recurse into.
enum Expansion<L> {
    Leaf(i32),
    Children(L),
}

/// Applies a move, executes a closure with the new state, then undoes the move.
/// Handles turn toggling automatically.
fn with_move_applied<S, M, F, R>(game_move: &M, state: &mut S, f: F) -> Result<R, SearchError>
where
    S: GameState,
    M: GameMove<State = S>,
    F: FnOnce(&mut S) -> Result<R, SearchError>,
{
    game_move
        .apply(state)
        .map_err(|err| SearchError::MoveApplication {
            reason: format!("apply {:?}: {:?}", game_move, err),
        })?;
    state.toggle_turn();

    let result = f(state);

    game_move
        .undo(state)
        .map_err(|err| SearchError::MoveApplication {
            reason: format!("undo {:?}: {:?}", game_move, err),
        })?;
    state.toggle_turn();

    result
}

/// Updates best score and move if new score is strictly better.
/// Returns true if best_score was updated.
fn update_best<M: Clone>(
    score: i32,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut i32,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = if maximizing_player {
        score > *best_score
    } else {
        score < *best_score
    };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

fn worst_score(maximizing_player: bool) -> i32 {
    if maximizing_player {
        i32::MIN
    } else {
        i32::MAX
    }
}

/// Terminal check, horizon check, move generation and ordering for one node.
fn expand_node<S, G, E, O>(
    context: &SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    depth: u8,
) -> Expansion<G::MoveList>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    context.increment_position_count();

    if let Some(score) = evaluator.terminal_score(state, depth) {
        return Expansion::Leaf(score);
    }

    if depth == 0 {
        return Expansion::Leaf(evaluator.evaluate(state, depth));
    }

    context.increment_move_gen();
    let mut candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return Expansion::Leaf(evaluator.no_moves_score(state, depth));
    }

    move_orderer.order_moves(candidates.as_mut(), state);
    Expansion::Children(candidates)
}

/// Searches `state` to the context's depth and returns the best move for the
/// player to move together with the minimax score.
///
/// The root is treated like any other node: a decided position, a depth of
/// zero, or a player without legal moves yields an outcome with no move.
///
/// # Examples
///
/// ```ignore
/// let mut context = SearchContext::new(3);
/// let outcome = alpha_beta_search(
///     &mut context,
///     &mut position,
///     &move_gen,
///     &evaluator,
///     &move_orderer,
/// )?;
/// ```
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta_search<S, G, E, O>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
) -> Result<SearchOutcome<G::Move>, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S>,
    G::MoveList: Sync,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let depth = context.search_depth();
    debug!("alpha-beta search depth: {}", depth);
    context.reset_stats();
    let start = Instant::now();

    let (score, best_move) = if context.is_parallel() {
        match expand_node(context, state, move_generator, evaluator, move_orderer, depth) {
            Expansion::Leaf(score) => (score, None),
            Expansion::Children(candidates) => search_root_parallel(
                context,
                state,
                move_generator,
                evaluator,
                move_orderer,
                &candidates,
                depth,
            )?,
        }
    } else {
        alpha_beta_minimax(
            context,
            state,
            move_generator,
            evaluator,
            move_orderer,
            depth,
            i32::MIN,
            i32::MAX,
        )?
    };

    context.stats.record_result(score, start.elapsed());
    debug!(
        "search finished: score {}, {} positions, {} cutoffs",
        score,
        context.searched_position_count(),
        context.cutoff_count()
    );

    Ok(SearchOutcome { best_move, score })
}

fn search_root_parallel<S, G, E, O, C>(
    context: &SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    candidates: &C,
    depth: u8,
) -> Result<(i32, Option<G::Move>), SearchError>
where
    S: GameState,
    G: MoveGenerator<S, MoveList = C>,
    G::Move: GameMove<State = S>,
    C: MoveCollection<G::Move> + Sync,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let maximizing_player = state.is_maximizing_player();

    let results: Vec<(i32, G::Move)> = candidates
        .as_ref()
        .par_iter()
        .map(|game_move| -> Result<(i32, G::Move), SearchError> {
            let mut cloned_state = state.clone();

            let (score, _) = with_move_applied(game_move, &mut cloned_state, |state| {
                alpha_beta_minimax(
                    context,
                    state,
                    move_generator,
                    evaluator,
                    move_orderer,
                    depth - 1,
                    i32::MIN,
                    i32::MAX,
                )
            })?;

            Ok((score, game_move.clone()))
        })
        .collect::<Result<_, SearchError>>()?;

    let mut best_score = worst_score(maximizing_player);
    let mut best_move = None;

    for (score, game_move) in results {
        update_best(
            score,
            &game_move,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );
    }

    Ok((best_score, best_move))
}

/// Alpha-beta minimax over a single node. Returns the node's score and, when
/// the node was expanded, the move that produced it.
#[allow(clippy::too_many_arguments)]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
fn alpha_beta_minimax<S, G, E, O>(
    context: &SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
) -> Result<(i32, Option<G::Move>), SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S>,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let candidates =
        match expand_node(context, state, move_generator, evaluator, move_orderer, depth) {
            Expansion::Leaf(score) => return Ok((score, None)),
            Expansion::Children(candidates) => candidates,
        };

    let maximizing_player = state.is_maximizing_player();
    let mut best_score = worst_score(maximizing_player);
    let mut best_move = None;

    for game_move in candidates.as_ref().iter() {
        let (score, _) = with_move_applied(game_move, state, |state| {
            alpha_beta_minimax(
                context,
                state,
                move_generator,
                evaluator,
                move_orderer,
                depth - 1,
                alpha,
                beta,
            )
        })?;

        update_best(
            score,
            game_move,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );

        if maximizing_player {
            alpha = max(alpha, score);
        } else {
            beta = min(beta, score);
        }
        if beta <= alpha {
            context.increment_cutoffs();
            break;
        }
    }

    Ok((best_score, best_move))
}
