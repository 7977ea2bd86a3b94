use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Deepest search a difficulty may request.
pub const MAX_SEARCH_DEPTH: u8 = 5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("mistake probability {value} for {difficulty} is outside [0, 1]")]
    InvalidProbability { difficulty: Difficulty, value: f64 },
    #[error("search depth {depth} for {difficulty} must be between 1 and {}", MAX_SEARCH_DEPTH)]
    InvalidDepth { difficulty: Difficulty, depth: u8 },
    #[error("unknown difficulty '{input}', expected easy, medium or hard")]
    UnknownDifficulty { input: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Difficulty::Easy),
            "medium" | "m" | "3" => Ok(Difficulty::Medium),
            "hard" | "h" | "5" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty {
                input: s.to_string(),
            }),
        }
    }
}

/// How hard a computer player tries: plies searched and the chance of
/// playing a random legal move instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultySettings {
    pub search_depth: u8,
    pub mistake_probability: f64,
}

impl DifficultySettings {
    pub fn new(search_depth: u8, mistake_probability: f64) -> Self {
        Self {
            search_depth,
            mistake_probability,
        }
    }

    fn validate(&self, difficulty: Difficulty) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.mistake_probability) {
            return Err(ConfigError::InvalidProbability {
                difficulty,
                value: self.mistake_probability,
            });
        }
        if self.search_depth == 0 || self.search_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::InvalidDepth {
                difficulty,
                depth: self.search_depth,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyTable {
    easy: DifficultySettings,
    medium: DifficultySettings,
    hard: DifficultySettings,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: DifficultySettings::new(1, 0.25),
            medium: DifficultySettings::new(3, 0.10),
            hard: DifficultySettings::new(5, 0.0),
        }
    }
}

impl DifficultyTable {
    pub fn new(
        easy: DifficultySettings,
        medium: DifficultySettings,
        hard: DifficultySettings,
    ) -> Result<Self, ConfigError> {
        Self::default()
            .with(Difficulty::Easy, easy)?
            .with(Difficulty::Medium, medium)?
            .with(Difficulty::Hard, hard)
    }

    /// Replaces the settings for one level, rejecting out-of-range values.
    pub fn with(
        mut self,
        difficulty: Difficulty,
        settings: DifficultySettings,
    ) -> Result<Self, ConfigError> {
        settings.validate(difficulty)?;
        *self.slot_mut(difficulty) = settings;
        Ok(self)
    }

    pub fn get(&self, difficulty: Difficulty) -> DifficultySettings {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn slot_mut(&mut self, difficulty: Difficulty) -> &mut DifficultySettings {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}
