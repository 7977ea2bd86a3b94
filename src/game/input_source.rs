use std::cell::RefCell;
use std::collections::VecDeque;

use crate::board::side::Side;
use crate::input_handler::{parse_move_input, read_step, wait_for_step, InputError, MoveInput};

/// Where the moves of human-controlled sides come from.
pub trait InputSource {
    /// `Ok(None)` means the input could not be understood and the player
    /// should be asked again.
    fn get_move(&self, current_turn: Side) -> Result<Option<MoveInput>, InputError>;

    /// Blocks until the player asks for the next computer move.
    fn wait_for_step(&self) -> Result<(), InputError>;
}

pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&self, _current_turn: Side) -> Result<Option<MoveInput>, InputError> {
        match parse_move_input() {
            Ok(move_input) => Ok(Some(move_input)),
            Err(InputError::UserExit) => Err(InputError::UserExit),
            Err(InputError::IOError { error }) => Err(InputError::IOError { error }),
            Err(error) => {
                println!("{}", error);
                Ok(None)
            }
        }
    }

    fn wait_for_step(&self) -> Result<(), InputError> {
        println!("Press Enter for the next move (q to quit)");
        wait_for_step()
    }
}

/// Replays a fixed list of typed moves, then exits.
pub struct ScriptedInput {
    lines: RefCell<VecDeque<String>>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: RefCell::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.borrow().len()
    }
}

impl InputSource for ScriptedInput {
    fn get_move(&self, _current_turn: Side) -> Result<Option<MoveInput>, InputError> {
        let line = self
            .lines
            .borrow_mut()
            .pop_front()
            .ok_or(InputError::UserExit)?;
        Ok(line.parse().ok())
    }

    fn wait_for_step(&self) -> Result<(), InputError> {
        let line = self
            .lines
            .borrow_mut()
            .pop_front()
            .ok_or(InputError::UserExit)?;
        read_step(&mut format!("{}\n", line).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coord::Coord;

    #[test]
    fn test_scripted_input() {
        let input = ScriptedInput::new(vec!["c3", "nonsense"]);
        assert_eq!(
            input.get_move(Side::A),
            Ok(Some(MoveInput::Placement {
                dest: Coord::new(2, 2)
            }))
        );
        assert_eq!(input.get_move(Side::B), Ok(None));
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.get_move(Side::A), Err(InputError::UserExit));
    }

    #[test]
    fn test_scripted_steps() {
        let input = ScriptedInput::new(vec!["", "quit"]);
        assert_eq!(input.wait_for_step(), Ok(()));
        assert_eq!(input.wait_for_step(), Err(InputError::UserExit));
        assert_eq!(input.wait_for_step(), Err(InputError::UserExit));
    }
}
