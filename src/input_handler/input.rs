//! Move input parsing.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::coord::Coord;
use crate::teeko_move::Move;

static PLACEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-e][1-5])$").expect("PLACEMENT_RE regex should be valid")
});
static RELOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-e][1-5])\s*[- ]?\s*([a-e][1-5])$").expect("RELOCATION_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

/// A move as typed by a player: `c3` places on c3, `b2-c3` (or `b2c3`,
/// `b2 c3`) slides the piece on b2 to c3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveInput {
    Placement { dest: Coord },
    Relocation { source: Coord, dest: Coord },
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_lowercase();
        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };
        let cell = |notation: &str| Coord::from_notation(notation).ok_or_else(invalid);

        if let Some(caps) = PLACEMENT_RE.captures(&normalized) {
            return Ok(MoveInput::Placement {
                dest: cell(&caps[1])?,
            });
        }

        if let Some(caps) = RELOCATION_RE.captures(&normalized) {
            return Ok(MoveInput::Relocation {
                source: cell(&caps[1])?,
                dest: cell(&caps[2])?,
            });
        }

        Err(invalid())
    }
}

impl From<MoveInput> for Move {
    fn from(input: MoveInput) -> Self {
        match input {
            MoveInput::Placement { dest } => Move::place(dest),
            MoveInput::Relocation { source, dest } => Move::relocate(source, dest),
        }
    }
}

fn is_exit_command(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "q" | "quit" | "exit")
}

/// Reads one line from `reader` and parses it as a move. `q`, `quit` and
/// `exit` end the game; end of input does too.
pub fn read_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(|error| InputError::IOError {
        error: error.to_string(),
    })?;

    if read == 0 || is_exit_command(&line) {
        return Err(InputError::UserExit);
    }
    line.parse()
}

/// Reads one line from `reader` as a step command: any line continues, an
/// exit command or end of input stops.
pub fn read_step<R: BufRead>(reader: &mut R) -> Result<(), InputError> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(|error| InputError::IOError {
        error: error.to_string(),
    })?;

    if read == 0 || is_exit_command(&line) {
        return Err(InputError::UserExit);
    }
    Ok(())
}

/// Waits for Enter on stdin.
pub fn wait_for_step() -> Result<(), InputError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    read_step(&mut handle)
}

/// Prompts on stdout and reads a move from stdin.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    print!("> ");
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })?;

    let stdin = io::stdin();
    let mut handle = stdin.lock();
    read_move_input(&mut handle)
}
