mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("topocheck CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Check(args) => {
            info!("Dispatching to 'check' command.");
            commands::check::run(args)
        }
        Commands::Rules(args) => {
            info!("Dispatching to 'rules' command.");
            commands::rules::run(args)
        }
    };

    match &command_result {
        Ok(()) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}
