mod cli;

use cli::commands::Command;
use cli::Teeko;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    teeko::instrumentation::init_tracing();

    Teeko::from_args().execute();

    #[cfg(feature = "instrumentation")]
    teeko::instrumentation::print_timing_statistics();
}
