//! PvP command - two humans on one terminal.

use structopt::StructOpt;
use teeko::game::config::{EngineConfig, MoverPolicy};
use teeko::game::input_source::HumanInput;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {}

impl Command for PvpArgs {
    fn execute(self) {
        let config =
            EngineConfig::default().with_players(MoverPolicy::Human, MoverPolicy::Human);
        run_game_loop(HumanInput, config, None, false);
    }
}
