//! Frotas Checker - fleet yard and loading ramp dashboard
//!
//! A CLI tool that tracks vehicles across the yard and loading ramps.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
