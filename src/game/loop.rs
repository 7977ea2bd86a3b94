use std::thread;
use std::time::Duration;

use log::{info, warn};

use crate::game::display::GameDisplay;
use crate::game::engine::Engine;
use crate::game::input_source::InputSource;
use crate::game::state::GameStatus;
use crate::input_handler::InputError;
use crate::move_generator::MoveError;

/// Drives one match to the end: renders, asks human sides for input and
/// lets computer sides move.
pub struct GameLoop<I: InputSource> {
    engine: Engine,
    ui: GameDisplay,
    input: I,
    /// Pause after each computer move, to make computer games watchable.
    delay_between_moves: Option<Duration>,
    /// Wait for the player before each computer move.
    step_mode: bool,
    show_stats: bool,
}

impl<I: InputSource> GameLoop<I> {
    pub fn new(engine: Engine, input: I) -> Self {
        Self {
            engine,
            ui: GameDisplay::new(),
            input,
            delay_between_moves: None,
            step_mode: false,
            show_stats: true,
        }
    }

    pub fn with_display(mut self, ui: GameDisplay) -> Self {
        self.ui = ui;
        self
    }

    pub fn with_delay(mut self, delay: Option<Duration>) -> Self {
        self.delay_between_moves = delay;
        self
    }

    pub fn with_step_mode(mut self, step_mode: bool) -> Self {
        self.step_mode = step_mode;
        self
    }

    pub fn with_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the final status, or `InProgress` if a player quit.
    pub fn run(&mut self) -> Result<GameStatus, MoveError> {
        loop {
            self.ui.render(&self.engine, self.show_stats);
            if self.engine.status() != GameStatus::InProgress {
                return Ok(self.engine.status());
            }

            let side = self.engine.side_to_move();
            if self.engine.policy(side).is_computer() {
                if self.step_mode {
                    if let Err(error) = self.input.wait_for_step() {
                        info!("stopped stepping at ply {}: {}", self.engine.ply(), error);
                        return Ok(GameStatus::InProgress);
                    }
                }
                self.engine.play_ai_turn()?;
                if let Some(delay) = self.delay_between_moves {
                    thread::sleep(delay);
                }
                continue;
            }

            println!("Enter your move (e.g. c3 or b2-c3, q to quit):");
            match self.input.get_move(side) {
                Ok(Some(input)) => {
                    if let Err(error) = self.engine.make_move_from_input(input) {
                        println!("error: {}", error);
                        self.pause_for_error();
                    }
                }
                Ok(None) => {
                    println!("Invalid input");
                    self.pause_for_error();
                }
                Err(InputError::UserExit) => {
                    info!("{} left the game at ply {}", side, self.engine.ply());
                    return Ok(GameStatus::InProgress);
                }
                Err(error) => {
                    warn!("input failed: {}", error);
                    return Ok(GameStatus::InProgress);
                }
            }
        }
    }

    fn pause_for_error(&self) {
        if self.delay_between_moves.is_some() {
            thread::sleep(Duration::from_millis(800));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::board::side::Side;
    use crate::game::config::MoverPolicy;
    use crate::game::input_source::ScriptedInput;

    #[test]
    fn test_scripted_game_to_a_win() {
        let engine = Engine::new_game(MoverPolicy::Human, MoverPolicy::Human, Some(2)).unwrap();
        let input = ScriptedInput::new(vec![
            "a1", "e5", "b1", "d5", "zz", "c1", "a4", "c1", "d1",
        ]);
        let mut game = GameLoop::new(engine, input).with_display(GameDisplay::plain());

        assert_eq!(game.run(), Ok(GameStatus::Won(Side::A)));
        assert_eq!(game.engine().ply(), 7);
    }

    #[test]
    fn test_quitting_leaves_game_in_progress() {
        let engine = Engine::new_game(MoverPolicy::Human, MoverPolicy::Human, Some(2)).unwrap();
        let input = ScriptedInput::new(vec!["c3"]);
        let mut game = GameLoop::new(engine, input).with_display(GameDisplay::plain());

        assert_eq!(game.run(), Ok(GameStatus::InProgress));
        assert_eq!(game.engine().ply(), 1);
    }

    #[test]
    fn test_step_mode_plays_one_move_per_step() {
        // Side A's opening move is played by the constructor.
        let engine = Engine::new_game(
            MoverPolicy::Computer(Difficulty::Easy),
            MoverPolicy::Computer(Difficulty::Easy),
            Some(6),
        )
        .unwrap();
        let steps = ScriptedInput::new(vec!["", "", "q"]);
        let mut game = GameLoop::new(engine, steps)
            .with_display(GameDisplay::plain())
            .with_step_mode(true);

        assert_eq!(game.run(), Ok(GameStatus::InProgress));
        assert_eq!(game.engine().ply(), 3);
    }

    #[test]
    fn test_computer_game_runs_to_the_end() {
        let engine = Engine::new_game(
            MoverPolicy::Computer(Difficulty::Easy),
            MoverPolicy::Computer(Difficulty::Easy),
            Some(8),
        )
        .unwrap();
        let mut game = GameLoop::new(engine, ScriptedInput::new(Vec::<String>::new()))
            .with_display(GameDisplay::plain())
            .with_stats(false);

        let status = game.run().unwrap();
        assert_ne!(status, GameStatus::InProgress);
    }
}
