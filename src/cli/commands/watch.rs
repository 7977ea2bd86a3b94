//! Watch command - watch the computer play against itself.

use std::time::Duration;

use structopt::StructOpt;
use teeko::ai::Difficulty;
use teeko::game::config::{EngineConfig, MoverPolicy};
use teeko::game::input_source::HumanInput;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long = "a-difficulty", default_value = "medium")]
    pub a_difficulty: Difficulty,
    #[structopt(long = "b-difficulty", default_value = "medium")]
    pub b_difficulty: Difficulty,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long, help = "Wait for Enter before each move instead of the delay")]
    pub step: bool,
    #[structopt(long)]
    pub seed: Option<u64>,
    #[structopt(long, help = "Search root moves on all cores")]
    pub parallel: bool,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = EngineConfig {
            parallel_search: self.parallel,
            ..EngineConfig::default()
        }
        .with_players(
            MoverPolicy::Computer(self.a_difficulty),
            MoverPolicy::Computer(self.b_difficulty),
        )
        .with_seed(self.seed);

        // Both sides are computers, so input is only read to step.
        let delay = if self.step {
            None
        } else {
            Some(Duration::from_millis(self.delay_ms))
        };
        run_game_loop(HumanInput, config, delay, self.step);
    }
}
