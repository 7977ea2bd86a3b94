//! Best move command - search a single position.

use structopt::StructOpt;
use teeko::alpha_beta_searcher::SearchContext;
use teeko::board::side::Side;
use teeko::board::Board;
use teeko::rules::has_win;
use teeko::teeko_search::{find_immediate_win_or_block, search_best_move};

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(long)]
    pub position: Board,
    #[structopt(short, long)]
    pub side: Side,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(long, help = "Search root moves on all cores")]
    pub parallel: bool,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        if Side::ALL.iter().any(|&side| has_win(&self.position, side)) {
            eprintln!("The game is already decided in the given position.");
            return;
        }

        if let Some(immediate) = find_immediate_win_or_block(&self.position, self.side) {
            println!("{}", immediate);
            return;
        }

        let mut context = SearchContext::with_parallel(self.depth, self.parallel);
        match search_best_move(&mut context, &self.position, self.side, self.side) {
            Ok(outcome) => match outcome.best_move {
                Some(best_move) => println!("{} (score {})", best_move, outcome.score),
                None => eprintln!("There are no legal moves in the given position."),
            },
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
