//! Legal move enumeration and validation for both game phases.

pub mod error;
mod generator;

pub use error::MoveError;
pub use generator::{
    has_legal_move, legal_destinations, legal_destinations_for_source, legal_moves,
    validate_move,
};
