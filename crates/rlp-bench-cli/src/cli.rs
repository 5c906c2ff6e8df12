use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::bench::{list_cases, run_benchmark};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default, PartialEq)]
pub struct RunArgs {
    /// Path to a TOML configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to a TOML configuration file",
        long_help = "Path to a TOML configuration file. Relative paths inside it are resolved against the file's directory."
    )]
    pub config: Option<PathBuf>,

    /// Restrict the run to these cases
    #[arg(
        long = "case",
        value_name = "NAME",
        help = "Only run this case (can be specified multiple times)",
        action = clap::ArgAction::Append
    )]
    pub cases: Vec<String>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Directory holding the <case>_test.cpp sources"
    )]
    pub case_dir: Option<PathBuf>,

    #[arg(long, value_name = "DIR", help = "Directory receiving the charts")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, value_name = "N", help = "Executions per build variant")]
    pub trials: Option<usize>,

    /// Do not echo runner output
    #[arg(short, long, help = "Do not echo the test runner's output")]
    pub quiet: bool,

    #[arg(long, help = "Skip writing the JSON run summary")]
    pub no_summary: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Build, run and chart every configured case
    #[command(about = "Build, run and chart every configured case")]
    Run(RunArgs),

    /// List the configured cases and whether their sources exist
    #[command(about = "List the configured cases")]
    ListCases {
        #[arg(short, long, value_name = "FILE", help = "Path to a TOML configuration file")]
        config: Option<PathBuf>,
    },
}

pub fn cli() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Run(args)) => run_benchmark(args, cli.verbose),
        Some(Command::ListCases { config }) => {
            list_cases(config)?;
            Ok(ExitCode::SUCCESS)
        }
        // no subcommand runs every configured case
        None => run_benchmark(RunArgs::default(), cli.verbose),
    }
}
