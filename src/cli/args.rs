//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(name = "teeko", about = "Teeko, with a computer opponent, in Rust")]
pub enum Teeko {
    #[structopt(
        name = "play",
        about = "Play a game against the computer at the given `--difficulty` (easy, medium or hard; default: medium). Your side is chosen at random unless you specify it with `--side`. Side A moves first."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself. Each side's difficulty can be set with `--a-difficulty` and `--b-difficulty`. With `--step` each move waits for Enter."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Search for the best move of `--side` in the position given with `--position` (five rows of X, O and . separated by /), to the given `--depth` (default: 3)."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Teeko {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            BestMove(cmd),
        }
    }
}
