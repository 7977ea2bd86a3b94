//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

/// Represents the state of a two-player zero-sum game.
pub trait GameState: Clone + Send + Sync {
    /// Returns true if the player to move is the maximizing player.
    fn is_maximizing_player(&self) -> bool;

    /// Switches to the next player's turn.
    fn toggle_turn(&mut self);
}

/// Represents an action that can be applied to and undone from a game state.
pub trait GameMove: Clone + Send + Sync + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Applies this move to the given state for the player to move.
    fn apply(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Undoes this move on the given state.
    fn undo(&self, state: &mut Self::State) -> Result<(), Self::Error>;
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState>: Clone + Send + Sync {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the current player.
    fn generate_moves(&self, state: &mut S) -> Self::MoveList;
}

/// Evaluates a game position and returns a score. Higher scores favor the
/// maximizing player.
pub trait Evaluator<S: GameState>: Clone + Send + Sync {
    /// Static evaluation at the search horizon.
    fn evaluate(&self, state: &mut S, remaining_depth: u8) -> i32;

    /// Score for a position that is already decided, checked at every node
    /// before the depth cutoff. `None` means the game goes on.
    fn terminal_score(&self, _state: &mut S, _remaining_depth: u8) -> Option<i32> {
        None
    }

    /// Score for a node whose player to move has no legal move.
    fn no_moves_score(&self, state: &mut S, remaining_depth: u8) -> i32 {
        self.evaluate(state, remaining_depth)
    }
}

/// Orders moves to improve alpha-beta pruning efficiency.
pub trait MoveOrderer<S: GameState, M>: Clone + Send + Sync {
    /// Sorts moves in-place, placing "better" moves first. Implementations
    /// should be stable so equal moves keep their generation order.
    fn order_moves(&self, moves: &mut [M], state: &S);
}

/// A no-op move orderer for games without move ordering heuristics.
#[derive(Clone, Default, Debug)]
pub struct NoOpMoveOrderer;

impl<S: GameState, M> MoveOrderer<S, M> for NoOpMoveOrderer {
    #[inline(always)]
    fn order_moves(&self, _moves: &mut [M], _state: &S) {}
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + AsMut<[M]> + Send {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M: Send> MoveCollection<M> for Vec<M> {}

impl<M, A> MoveCollection<M> for smallvec::SmallVec<A>
where
    M: Send,
    A: smallvec::Array<Item = M>,
{
}
