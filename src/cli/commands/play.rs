//! Play command - play a game against the computer.

use structopt::StructOpt;
use teeko::ai::Difficulty;
use teeko::board::side::Side;
use teeko::game::config::{EngineConfig, MoverPolicy};
use teeko::game::input_source::HumanInput;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(short, long, default_value = "random")]
    pub side: Side,
    #[structopt(long, help = "Seed for the computer's random choices")]
    pub seed: Option<u64>,
    #[structopt(long, help = "Search root moves on all cores")]
    pub parallel: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let computer = MoverPolicy::Computer(self.difficulty);
        let (a_policy, b_policy) = match self.side {
            Side::A => (MoverPolicy::Human, computer),
            Side::B => (computer, MoverPolicy::Human),
        };
        let config = EngineConfig {
            parallel_search: self.parallel,
            ..EngineConfig::default()
        }
        .with_players(a_policy, b_policy)
        .with_seed(self.seed);

        println!("You play {}.", self.side);
        run_game_loop(HumanInput, config, None, false);
    }
}
