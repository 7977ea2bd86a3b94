//! Common types re-exported for convenience.

pub use crate::ai::{AiDecision, Difficulty};
pub use crate::board::coord::Coord;
pub use crate::board::side::Side;
pub use crate::board::Board;
pub use crate::game::config::{EngineConfig, MoverPolicy};
pub use crate::game::engine::Engine;
pub use crate::game::state::{GameEnding, GameStatus};
pub use crate::move_generator::MoveError;
pub use crate::teeko_move::Move;
