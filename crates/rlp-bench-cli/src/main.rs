use console::style;
use std::process::ExitCode;

mod cli;
mod commands;
mod logging;

fn main() -> ExitCode {
    match cli::cli() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", style("Error").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
