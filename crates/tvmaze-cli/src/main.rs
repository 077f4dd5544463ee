mod cli;
mod config;
mod logging;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("tvmaze: {:#}", err);
    }

    if let Err(err) = cli::run(cli).await {
        eprintln!("tvmaze error: {:#}", err);
        std::process::exit(1);
    }
}
