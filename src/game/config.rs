use std::fmt;

use crate::ai::{Difficulty, DifficultyTable};
use crate::board::side::Side;

/// Draw rules. A position only counts as repeated while it is among the last
/// `repetition_window` positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    pub max_plies: usize,
    pub repetition_window: usize,
    pub repetition_limit: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_plies: 30,
            repetition_window: 10,
            repetition_limit: 3,
        }
    }
}

/// Who makes the moves for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoverPolicy {
    Human,
    Computer(Difficulty),
}

impl MoverPolicy {
    pub fn is_computer(&self) -> bool {
        matches!(self, MoverPolicy::Computer(_))
    }
}

impl fmt::Display for MoverPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoverPolicy::Human => write!(f, "human"),
            MoverPolicy::Computer(difficulty) => write!(f, "computer ({})", difficulty),
        }
    }
}

/// Everything a match needs to start. Immutable once handed to the engine.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub rules: Rules,
    pub difficulties: DifficultyTable,
    /// Indexed by `Side::index()`.
    pub players: [MoverPolicy; 2],
    /// Seeds the engine's random source; `None` draws a seed from the OS.
    pub seed: Option<u64>,
    pub parallel_search: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            difficulties: DifficultyTable::default(),
            players: [MoverPolicy::Human, MoverPolicy::Computer(Difficulty::Medium)],
            seed: None,
            parallel_search: false,
        }
    }
}

impl EngineConfig {
    pub fn policy(&self, side: Side) -> MoverPolicy {
        self.players[side.index()]
    }

    pub fn with_players(mut self, a_policy: MoverPolicy, b_policy: MoverPolicy) -> Self {
        self.players = [a_policy, b_policy];
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
