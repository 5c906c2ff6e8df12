use crate::bench_config::BenchRunConfig;
use crate::errors::{util::ensure_file_exists, BenchError, BenchResult};
use crate::work_dir::{BenchCase, CaseWorkDir};
use serde::Serialize;
use std::fmt;
use std::process::{Command, Output};
use tracing::{debug, info, warn};

/// Which side of the comparison a build produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildVariant {
    /// Compiled with the old-path preprocessor definition
    Old,
    New,
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildVariant::Old => write!(f, "old"),
            BuildVariant::New => write!(f, "new"),
        }
    }
}

/// Compiles a case and executes the resulting module.
pub trait Toolchain {
    /// Compile `<case>_test.cpp` into `<case>_test.wasm`, replacing any
    /// previous artifact.
    fn build(&self, case: &BenchCase, variant: BuildVariant) -> BenchResult<()>;

    /// Run the compiled module once and return everything it printed.
    fn execute(&self, case: &BenchCase) -> BenchResult<String>;
}

/// Drives the external compiler and test runner as child processes
pub struct CommandToolchain {
    work_dir: CaseWorkDir,
    build_tool: String,
    runner_tool: String,
    old_define: String,
}

impl CommandToolchain {
    pub fn new(
        work_dir: CaseWorkDir,
        build_tool: impl Into<String>,
        runner_tool: impl Into<String>,
        old_define: impl Into<String>,
    ) -> Self {
        CommandToolchain {
            work_dir,
            build_tool: build_tool.into(),
            runner_tool: runner_tool.into(),
            old_define: old_define.into(),
        }
    }

    pub fn from_config(config: &BenchRunConfig) -> Self {
        Self::new(
            CaseWorkDir::new(&config.case_dir, &config.output_dir),
            &config.build_tool,
            &config.runner_tool,
            &config.old_define,
        )
    }

    fn build_command(&self, case: &BenchCase, variant: BuildVariant) -> Command {
        let mut cmd = Command::new(&self.build_tool);
        if variant == BuildVariant::Old {
            cmd.arg("-D").arg(&self.old_define);
        }
        // the compiler drops its artifact in the working directory of the child
        cmd.arg(self.work_dir.source(case))
            .current_dir(self.work_dir.case_dir());
        cmd
    }

    fn exec_command(&self, case: &BenchCase) -> Command {
        let mut cmd = Command::new(&self.runner_tool);
        cmd.arg("exec")
            .arg("--file")
            .arg(self.work_dir.wasm(case))
            .current_dir(self.work_dir.case_dir());
        cmd
    }

    fn run(program: &str, mut cmd: Command) -> BenchResult<Output> {
        debug!("Running {:?}", cmd);
        cmd.output().map_err(|source| BenchError::SpawnError {
            program: program.to_string(),
            source,
        })
    }
}

impl Toolchain for CommandToolchain {
    fn build(&self, case: &BenchCase, variant: BuildVariant) -> BenchResult<()> {
        ensure_file_exists(self.work_dir.source(case))?;

        info!("Building {} ({} variant)", case, variant);
        let output = Self::run(&self.build_tool, self.build_command(case, variant))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            debug!("{}: {}", self.build_tool, line);
        }

        if !output.status.success() {
            return Err(BenchError::BuildFailed {
                case: case.name().to_string(),
                variant,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    fn execute(&self, case: &BenchCase) -> BenchResult<String> {
        let output = Self::run(&self.runner_tool, self.exec_command(case))?;

        if !output.status.success() {
            warn!(
                "{} exited with {} for {}; scanning its output anyway",
                self.runner_tool, output.status, case
            );
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&stderr);
        }
        Ok(text)
    }
}
