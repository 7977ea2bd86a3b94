mod input;

pub use input::{
    parse_move_input, read_move_input, read_step, wait_for_step, InputError, MoveInput,
};
