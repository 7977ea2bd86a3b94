//! Teeko-specific implementation of the alpha-beta search traits.

pub mod implementation;
mod move_orderer;


pub use implementation::{
    best_move, find_immediate_win_or_block, search_best_move, TeekoEvaluator, TeekoMoveGenerator,
    TeekoPosition,
};
pub use move_orderer::TeekoMoveOrderer;
