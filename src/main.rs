mod board;
mod cli;
mod model;
mod tui;

use std::io;
use std::process;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let args = Cli::parse();

    let result = match args.command {
        Some(Command::Roster { status }) => cli::run_roster(status).map_err(io::Error::other),
        None => tui::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
