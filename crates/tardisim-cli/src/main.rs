//! tardisim CLI - tardigrade survival simulator.

use std::process::ExitCode;

use clap::Parser;
use tardisim_cli::{error_message, execute, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}
