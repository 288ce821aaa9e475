mod check_cmd;
mod cli;
mod compare_cmd;
mod config;
mod convert;
mod forecast_cmd;
mod logging;
mod pipeline;
mod report;
mod run_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run_cmd::run(args),
        Command::Check(args) => check_cmd::run(args),
        Command::Compare(args) => compare_cmd::run(args),
        Command::Forecast(args) => forecast_cmd::run(args),
    }
}
