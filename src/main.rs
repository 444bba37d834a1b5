//! Slippcrunch CLI
//!
//! A command-line tool for crunching a directory of `.slp` game replays into
//! a combo queue.

use clap::Parser;
use slippcrunch::cli::{run, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
