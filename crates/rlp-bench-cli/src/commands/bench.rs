use crate::cli::RunArgs;
use crate::logging::setup_logging;
use anyhow::Result;
use console::style;
use rlp_bench::work_dir::{BenchCase, CaseWorkDir};
use rlp_bench::{BenchError, BenchResult, BenchRunConfig, SuiteRunner};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

const SUCCESS_MESSAGE: &str = "generate spent time page file success!!!";
const FAILURE_MESSAGE: &str = "generate spent time page file failure!!!";

/// Layer command line flags over the loaded configuration
fn apply_overrides(config: &mut BenchRunConfig, args: &RunArgs) -> BenchResult<()> {
    if let Some(case_dir) = &args.case_dir {
        config.case_dir = case_dir.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if args.quiet {
        config.echo_output = false;
    }
    if args.no_summary {
        config.write_summary = false;
    }

    // flags are relative to where the command was started
    config.resolve_paths(&std::env::current_dir()?)?;
    config.select_cases(&args.cases)?;
    config.validate()?;
    Ok(())
}

fn load_config(args: &RunArgs) -> BenchResult<BenchRunConfig> {
    let mut config = BenchRunConfig::load(args.config.as_deref())?;
    apply_overrides(&mut config, args)?;
    Ok(config)
}

fn report_failure(e: &BenchError) -> ExitCode {
    error!("Benchmark run aborted: {}", e);
    println!("exception:  {} error: {}", e.category(), e);
    println!("{}", style(FAILURE_MESSAGE).red());
    ExitCode::FAILURE
}

pub fn run_benchmark(args: RunArgs, verbose: bool) -> Result<ExitCode> {
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            // no log file is known yet
            let _guard = setup_logging(verbose, None)?;
            return Ok(report_failure(&e));
        }
    };

    let _guard = setup_logging(verbose, config.log_file.as_deref())?;
    debug!("Loaded configuration: {:?}", config);

    match SuiteRunner::new(config).run() {
        Ok(_) => {
            println!("\n{}\n{}", style("SUCCESS").green().bold(), SUCCESS_MESSAGE);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report_failure(&e)),
    }
}

pub fn list_cases(config: Option<PathBuf>) -> Result<()> {
    let config = BenchRunConfig::load(config.as_deref())?;
    let work_dir = CaseWorkDir::new(&config.case_dir, &config.output_dir);

    let max_len = config
        .cases
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(0)
        .max("case".len());
    println!("case {} source", " ".repeat(max_len - "case".len()));
    println!("{}", "-".repeat(max_len + 8));
    for name in &config.cases {
        let source = work_dir.source(&BenchCase::new(name.as_str()));
        let marker = if source.is_file() {
            String::new()
        } else {
            format!(" {}", style("(missing)").yellow())
        };
        println!(
            "{} {} {}{}",
            name,
            " ".repeat(max_len - name.len()),
            source.display(),
            marker
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_overrides_win_over_config() {
        let mut config = BenchRunConfig::default();
        config.resolve_paths(Path::new("/bench")).unwrap();

        let args = RunArgs {
            case_dir: Some(PathBuf::from("/srv/cases")),
            output_dir: Some(PathBuf::from("/srv/charts")),
            trials: Some(2),
            quiet: true,
            no_summary: true,
            cases: vec!["string_three".to_string()],
            ..RunArgs::default()
        };
        apply_overrides(&mut config, &args).unwrap();

        assert_eq!(config.case_dir, PathBuf::from("/srv/cases"));
        assert_eq!(config.output_dir, PathBuf::from("/srv/charts"));
        assert_eq!(config.trials, 2);
        assert!(!config.echo_output);
        assert!(!config.write_summary);
        assert_eq!(config.cases, vec!["string_three"]);
    }

    #[test]
    fn test_relative_override_resolves_against_cwd() {
        let mut config = BenchRunConfig::default();
        config.resolve_paths(Path::new("/bench")).unwrap();

        let args = RunArgs {
            output_dir: Some(PathBuf::from("charts")),
            ..RunArgs::default()
        };
        apply_overrides(&mut config, &args).unwrap();

        let cwd = std::env::current_dir().unwrap();
        assert_eq!(config.output_dir, cwd.join("charts"));
        // untouched paths stay where the config put them
        assert_eq!(config.case_dir, PathBuf::from("/bench/case"));
    }

    #[test]
    fn test_unknown_case_is_rejected() {
        let mut config = BenchRunConfig::default();
        let args = RunArgs {
            cases: vec!["bigint_thirty".to_string()],
            ..RunArgs::default()
        };
        let err = apply_overrides(&mut config, &args).unwrap_err();
        assert!(matches!(err, BenchError::UnknownCase(ref name) if name == "bigint_thirty"));
        assert_eq!(err.category(), "configuration");
    }

    #[test]
    fn test_zero_trials_is_rejected() {
        let mut config = BenchRunConfig::default();
        let args = RunArgs {
            trials: Some(0),
            ..RunArgs::default()
        };
        assert!(apply_overrides(&mut config, &args).is_err());
    }
}
