mod cli;
mod config;
mod convert;
mod describe_cmd;
mod evaluate_cmd;
mod logging;
mod report;
mod source;

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
        Command::Evaluate(args) => evaluate_cmd::run(args),
        Command::Describe(args) => describe_cmd::run(args),
    }
}
