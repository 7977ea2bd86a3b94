use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two players. `A` always moves first.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    A = 0,
    B = 1,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    pub fn opposite(&self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Character used for this side's pieces in board notation.
    pub fn to_char(&self) -> char {
        match self {
            Side::A => 'X',
            Side::B => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Side::A),
            'O' | 'o' => Some(Side::B),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Side::A)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.to_char())
    }
}

impl Side {
    fn name(&self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Side {
    type Err = ParseError;
    fn from_str(side: &str) -> Result<Self, Self::Err> {
        match side.to_ascii_lowercase().as_str() {
            "a" | "x" => Ok(Side::A),
            "b" | "o" => Ok(Side::B),
            "random" => Ok(Side::random()),
            _ => Err("invalid side; options are: a, b, random"),
        }
    }
}
