//! Domain-agnostic tests for the alpha-beta search algorithm using Nim.
//!
//! Test coverage:
//! - Basic search functionality (winning moves, losing positions)
//! - Leaf handling at the root (zero depth, no moves, terminal scores)
//! - Agreement with plain minimax, including tie-breaking
//! - Parallel vs sequential search consistency
//! - Search statistics

use super::*;

/// State of a Nim game: players take 1-3 objects, last to take wins.
#[derive(Clone, Debug)]
struct NimState {
    pile: u8,
    is_player_one_turn: bool,
}

impl NimState {
    fn new(pile: u8) -> Self {
        Self {
            pile,
            is_player_one_turn: true,
        }
    }
}

impl GameState for NimState {
    fn is_maximizing_player(&self) -> bool {
        self.is_player_one_turn
    }

    fn toggle_turn(&mut self) {
        self.is_player_one_turn = !self.is_player_one_turn;
    }
}

#[derive(Clone, Debug, PartialEq)]
struct NimMove {
    take: u8,
}

impl GameMove for NimMove {
    type State = NimState;
    type Error = &'static str;

    fn apply(&self, state: &mut NimState) -> Result<(), Self::Error> {
        if self.take > state.pile || self.take == 0 || self.take > 3 {
            return Err("Invalid move");
        }
        state.pile -= self.take;
        Ok(())
    }

    fn undo(&self, state: &mut NimState) -> Result<(), Self::Error> {
        state.pile += self.take;
        Ok(())
    }
}

#[derive(Clone)]
struct NimMoveGenerator;

impl MoveGenerator<NimState> for NimMoveGenerator {
    type Move = NimMove;
    type MoveList = Vec<NimMove>;

    fn generate_moves(&self, state: &mut NimState) -> Vec<NimMove> {
        if state.pile == 0 {
            return vec![];
        }
        (1..=std::cmp::min(3, state.pile))
            .map(|take| NimMove { take })
            .collect()
    }
}

/// Generates a move that can never be applied, to exercise error propagation.
#[derive(Clone)]
struct BrokenMoveGenerator;

impl MoveGenerator<NimState> for BrokenMoveGenerator {
    type Move = NimMove;
    type MoveList = Vec<NimMove>;

    fn generate_moves(&self, _state: &mut NimState) -> Vec<NimMove> {
        vec![NimMove { take: 9 }]
    }
}

#[derive(Clone)]
struct NimEvaluator;

impl Evaluator<NimState> for NimEvaluator {
    fn evaluate(&self, state: &mut NimState, _remaining_depth: u8) -> i32 {
        // pile % 4 == 0 is a losing position for the player to move
        let mover_wins = state.pile % 4 != 0;
        if mover_wins == state.is_player_one_turn {
            100
        } else {
            -100
        }
    }

    fn no_moves_score(&self, state: &mut NimState, remaining_depth: u8) -> i32 {
        // Current player has no moves - previous player took the last piece and won
        if state.is_player_one_turn {
            -1000 - remaining_depth as i32
        } else {
            1000 + remaining_depth as i32
        }
    }
}

/// Flat evaluator: every leaf scores the same, so the search must fall back
/// to generation order among ties.
#[derive(Clone)]
struct FlatEvaluator;

impl Evaluator<NimState> for FlatEvaluator {
    fn evaluate(&self, _state: &mut NimState, _remaining_depth: u8) -> i32 {
        0
    }
}

/// Leaf scores that depend on the exact pile, so different moves get
/// different but overlapping scores.
#[derive(Clone)]
struct PileEvaluator;

impl Evaluator<NimState> for PileEvaluator {
    fn evaluate(&self, state: &mut NimState, _remaining_depth: u8) -> i32 {
        let base = (state.pile as i32 * 37) % 11 - 5;
        if state.is_player_one_turn {
            base
        } else {
            -base
        }
    }

    fn terminal_score(&self, state: &mut NimState, remaining_depth: u8) -> Option<i32> {
        if state.pile == 0 {
            let score = 500 + remaining_depth as i32;
            Some(if state.is_player_one_turn { -score } else { score })
        } else {
            None
        }
    }
}

/// Reverses generation order, to check that ordering reaches the search.
#[derive(Clone)]
struct ReverseOrderer;

impl MoveOrderer<NimState, NimMove> for ReverseOrderer {
    fn order_moves(&self, moves: &mut [NimMove], _state: &NimState) {
        moves.reverse();
    }
}

/// Plain minimax with the same tie-breaking rule (first strictly better move).
fn naive_minimax<E: Evaluator<NimState>>(
    state: &mut NimState,
    evaluator: &E,
    depth: u8,
) -> (i32, Option<NimMove>) {
    if let Some(score) = evaluator.terminal_score(state, depth) {
        return (score, None);
    }
    if depth == 0 {
        return (evaluator.evaluate(state, depth), None);
    }
    let moves = NimMoveGenerator.generate_moves(state);
    if moves.is_empty() {
        return (evaluator.no_moves_score(state, depth), None);
    }

    let maximizing = state.is_maximizing_player();
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;
    for game_move in moves {
        game_move.apply(state).unwrap();
        state.toggle_turn();
        let (score, _) = naive_minimax(state, evaluator, depth - 1);
        game_move.undo(state).unwrap();
        state.toggle_turn();

        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best_move = Some(game_move);
        }
    }
    (best_score, best_move)
}

fn search<E: Evaluator<NimState>>(
    state: &mut NimState,
    evaluator: &E,
    depth: u8,
    parallel: bool,
) -> SearchOutcome<NimMove> {
    let mut context = SearchContext::with_parallel(depth, parallel);
    alpha_beta_search(
        &mut context,
        state,
        &NimMoveGenerator,
        evaluator,
        &NoOpMoveOrderer,
    )
    .unwrap()
}

#[test]
fn test_nim_finds_winning_move_from_5() {
    let mut state = NimState::new(5);
    let outcome = search(&mut state, &NimEvaluator, 10, false);

    assert_eq!(
        outcome.best_move.unwrap().take,
        1,
        "From pile of 5, should take 1 to leave opponent with 4"
    );
    assert!(outcome.score > 0);
}

#[test]
fn test_nim_finds_winning_move_from_6() {
    let mut state = NimState::new(6);
    let outcome = search(&mut state, &NimEvaluator, 10, false);

    assert_eq!(
        outcome.best_move.unwrap().take,
        2,
        "From pile of 6, should take 2 to leave opponent with 4"
    );
}

#[test]
fn test_nim_finds_winning_move_from_7() {
    let mut state = NimState::new(7);
    let outcome = search(&mut state, &NimEvaluator, 10, false);

    assert_eq!(
        outcome.best_move.unwrap().take,
        3,
        "From pile of 7, should take 3 to leave opponent with 4"
    );
}

#[test]
fn test_nim_losing_position() {
    let mut state = NimState::new(4);
    let outcome = search(&mut state, &NimEvaluator, 10, false);

    assert!(
        outcome.best_move.is_some(),
        "Should return a move even from losing position"
    );
    assert!(outcome.score < 0);
}

#[test]
fn test_minimizing_player_finds_winning_move() {
    let mut state = NimState::new(6);
    state.toggle_turn();
    let outcome = search(&mut state, &NimEvaluator, 10, false);

    assert_eq!(outcome.best_move.unwrap().take, 2);
    assert!(outcome.score < 0, "player two winning scores negative");
}

#[test]
fn test_zero_depth_returns_static_evaluation() {
    let mut state = NimState::new(5);
    let outcome = search(&mut state, &NimEvaluator, 0, false);

    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.score, 100);
}

#[test]
fn test_no_moves_at_root() {
    let mut state = NimState::new(0);
    let outcome = search(&mut state, &NimEvaluator, 3, false);

    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.score, -1003);
}

#[test]
fn test_terminal_score_checked_before_depth_cutoff() {
    let mut state = NimState::new(0);
    let outcome = search(&mut state, &PileEvaluator, 0, false);

    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.score, -500);
}

#[test]
fn test_state_restored_after_search() {
    let mut state = NimState::new(9);
    search(&mut state, &PileEvaluator, 6, false);

    assert_eq!(state.pile, 9);
    assert!(state.is_player_one_turn);
}

#[test]
fn test_matches_naive_minimax() {
    for pile in 1..=12 {
        for depth in 1..=6 {
            for &player_one in &[true, false] {
                let mut state = NimState::new(pile);
                state.is_player_one_turn = player_one;

                let expected = naive_minimax(&mut state.clone(), &PileEvaluator, depth);
                let outcome = search(&mut state, &PileEvaluator, depth, false);

                assert_eq!(
                    (outcome.score, outcome.best_move),
                    expected,
                    "pile {} depth {} player one {}",
                    pile,
                    depth,
                    player_one
                );
            }
        }
    }
}

#[test]
fn test_ties_keep_first_move() {
    let mut state = NimState::new(10);
    let outcome = search(&mut state, &FlatEvaluator, 3, false);

    assert_eq!(outcome.best_move, Some(NimMove { take: 1 }));
    assert_eq!(outcome.score, 0);
}

#[test]
fn test_move_orderer_is_applied() {
    let mut state = NimState::new(10);
    let mut context = SearchContext::new(3);
    let outcome = alpha_beta_search(
        &mut context,
        &mut state,
        &NimMoveGenerator,
        &FlatEvaluator,
        &ReverseOrderer,
    )
    .unwrap();

    assert_eq!(outcome.best_move, Some(NimMove { take: 3 }));
}

#[test]
fn test_parallel_matches_sequential() {
    for pile in 1..=12 {
        for depth in 1..=5 {
            let sequential = search(&mut NimState::new(pile), &PileEvaluator, depth, false);
            let parallel = search(&mut NimState::new(pile), &PileEvaluator, depth, true);
            assert_eq!(sequential, parallel, "pile {} depth {}", pile, depth);
        }
    }
}

#[test]
fn test_pruning_reduces_positions() {
    let mut state = NimState::new(15);
    let mut context = SearchContext::new(8);
    alpha_beta_search(
        &mut context,
        &mut state,
        &NimMoveGenerator,
        &NimEvaluator,
        &NoOpMoveOrderer,
    )
    .unwrap();

    // A full 3-ary tree of depth 8 has 9841 nodes.
    assert!(context.searched_position_count() > 0);
    assert!(context.searched_position_count() < 9841);
    assert!(context.cutoff_count() > 0);
    assert!(context.move_gen_calls() > 0);
    assert!(context.last_score().is_some());
    assert!(context.last_search_duration().is_some());
}

#[test]
fn test_stats_reset_between_searches() {
    let mut context = SearchContext::new(4);
    alpha_beta_search(
        &mut context,
        &mut NimState::new(12),
        &NimMoveGenerator,
        &NimEvaluator,
        &NoOpMoveOrderer,
    )
    .unwrap();
    let first = context.searched_position_count();

    alpha_beta_search(
        &mut context,
        &mut NimState::new(12),
        &NimMoveGenerator,
        &NimEvaluator,
        &NoOpMoveOrderer,
    )
    .unwrap();
    assert_eq!(context.searched_position_count(), first);
}

#[test]
fn test_move_application_error_is_reported() {
    let mut state = NimState::new(5);
    let mut context = SearchContext::new(2);
    let result = alpha_beta_search(
        &mut context,
        &mut state,
        &BrokenMoveGenerator,
        &NimEvaluator,
        &NoOpMoveOrderer,
    );

    assert!(matches!(result, Err(SearchError::MoveApplication { .. })));
    assert_eq!(state.pile, 5);
}
