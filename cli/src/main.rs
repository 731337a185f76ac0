mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use taqwim::Calendar;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // The configuration is fixed for the rest of the process.
    let config = config::load(cli.config.as_deref(), cli.locale.map(Into::into))?;
    let calendar = Calendar::new(config);

    match cli.command {
        Command::Today => commands::today(&calendar),
        Command::Month(args) => commands::month(&calendar, args),
        Command::Convert(args) => commands::convert(&calendar, args),
        Command::Validate(args) => commands::validate(&calendar, args),
        Command::Age(args) => commands::age(&calendar, args),
        Command::Config => commands::config(&calendar),
    }
}
