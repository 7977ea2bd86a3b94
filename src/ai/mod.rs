//! Computer player: difficulty levels and move selection.

pub mod difficulty;
pub mod policy;

pub use difficulty::{ConfigError, Difficulty, DifficultySettings, DifficultyTable};
pub use policy::{choose_move, choose_move_with_context, AiDecision, DecisionKind};
