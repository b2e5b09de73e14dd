//! fsame - duplicate content reporter
//!
//! Entry point for the fsame CLI.

use clap::Parser;
use fsame::{cli::Cli, error::ExitCode};

fn main() {
    let cli = Cli::parse();

    match fsame::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
