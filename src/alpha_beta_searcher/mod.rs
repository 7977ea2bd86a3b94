//! Game-agnostic alpha-beta minimax search.
//!
//! A game plugs in by implementing [`GameState`], [`GameMove`],
//! [`MoveGenerator`], [`Evaluator`] and optionally [`MoveOrderer`].

mod search;
mod traits;

#[cfg(test)]
mod tests;

pub use search::{alpha_beta_search, SearchContext, SearchError, SearchOutcome};
pub use traits::{
    Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, MoveOrderer, NoOpMoveOrderer,
};
