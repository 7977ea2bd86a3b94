//! Shared utilities for CLI commands.

use std::time::Duration;

use teeko::game::config::EngineConfig;
use teeko::game::display::GameDisplay;
use teeko::game::engine::Engine;
use teeko::game::input_source::InputSource;
use teeko::game::r#loop::GameLoop;
use teeko::game::state::GameStatus;

pub(crate) fn run_game_loop<I>(
    input_source: I,
    config: EngineConfig,
    delay: Option<Duration>,
    step_mode: bool,
) where
    I: InputSource,
{
    let engine = match Engine::with_config(config) {
        Ok(engine) => engine,
        Err(error) => {
            eprintln!("Failed to start the game: {}", error);
            std::process::exit(1);
        }
    };

    let mut game = GameLoop::new(engine, input_source)
        .with_display(GameDisplay::new())
        .with_delay(delay)
        .with_step_mode(step_mode);

    match game.run() {
        Ok(GameStatus::InProgress) => println!("Game abandoned."),
        Ok(_) => println!("Game over."),
        Err(error) => {
            eprintln!("error: {}", error);
            std::process::exit(1);
        }
    }
}
