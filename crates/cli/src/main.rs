use std::process::ExitCode;

use clap::Parser;

mod commands;

use commands::{Cli, Command};
use depot_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Scan(args) => commands::scan::run(args),
    }
}
