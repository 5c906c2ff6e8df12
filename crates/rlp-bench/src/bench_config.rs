use crate::errors::{BenchError, BenchResult};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "RLP_BENCH";

/// The benchmark cases, in the order they are run by default
pub const DEFAULT_CASES: [&str; 14] = [
    "bigint_one",
    "bigint_four",
    "bigint_eight",
    "bigint_twelve",
    "bigint_sixteen",
    "string_one",
    "string_two",
    "string_three",
    "list_bigint_one",
    "list_bigint_two",
    "list_bigint_three",
    "list_string_one",
    "list_string_two",
    "list_string_three",
];

/// Settings for a full benchmark run.
///
/// Every field has a default so an empty configuration reproduces the
/// stock run: fourteen cases, ten trials per build, `platon-cpp` and
/// `platon-test` from `PATH`.
///
/// Without a configuration file the default `case` and `.` directories are
/// taken relative to the current directory, so either run from the bench
/// directory or pass `--case-dir` and `--output-dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchRunConfig {
    /// Directory holding the `<case>_test.cpp` sources
    pub case_dir: PathBuf,
    /// Directory receiving charts and the run summary
    pub output_dir: PathBuf,
    pub cases: Vec<String>,
    /// Executions per build variant
    pub trials: usize,
    /// Highest y-axis tick; ticks are drawn at every integer from zero
    pub y_tick_max: i64,
    pub build_tool: String,
    pub runner_tool: String,
    /// Preprocessor definition selecting the old code path
    pub old_define: String,
    /// Echo every line of runner output to stdout
    pub echo_output: bool,
    pub chart_width: u32,
    pub chart_height: u32,
    /// `png` or `svg`
    pub chart_extension: String,
    pub write_summary: bool,
    pub summary_filename: String,
    pub log_file: Option<PathBuf>,
}

impl Default for BenchRunConfig {
    fn default() -> Self {
        BenchRunConfig {
            case_dir: PathBuf::from("case"),
            output_dir: PathBuf::from("."),
            cases: DEFAULT_CASES.iter().map(|c| c.to_string()).collect(),
            trials: 10,
            y_tick_max: 29,
            build_tool: "platon-cpp".to_string(),
            runner_tool: "platon-test".to_string(),
            old_define: "OLD".to_string(),
            echo_output: true,
            chart_width: 640,
            chart_height: 480,
            chart_extension: "png".to_string(),
            write_summary: true,
            summary_filename: "summary.json".to_string(),
            log_file: None,
        }
    }
}

impl BenchRunConfig {
    /// Load configuration from an optional TOML file layered under
    /// `RLP_BENCH_*` environment variables, then resolve relative paths.
    ///
    /// Relative paths are taken from the directory containing the file, or
    /// from the current directory when no file is given.
    pub fn load(file: Option<&Path>) -> BenchResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cases")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: BenchRunConfig = settings.try_deserialize()?;

        let base = match file.and_then(Path::parent) {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir()?,
        };
        config.resolve_paths(&base)?;
        config.validate()?;
        Ok(config)
    }

    /// Make every relative path absolute against `base`
    pub fn resolve_paths(&mut self, base: &Path) -> BenchResult<()> {
        let base = if base.is_absolute() {
            base.to_path_buf()
        } else {
            std::env::current_dir()?.join(base)
        };

        self.case_dir = absolutize(&base, &self.case_dir);
        self.output_dir = absolutize(&base, &self.output_dir);
        self.log_file = self.log_file.as_ref().map(|p| absolutize(&base, p));
        Ok(())
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.cases.is_empty() {
            return Err(BenchError::ConfigError("No cases configured".to_string()));
        }
        if self.trials == 0 {
            return Err(BenchError::ConfigError(
                "trials must be at least 1".to_string(),
            ));
        }
        if self.y_tick_max < 0 {
            return Err(BenchError::ConfigError(format!(
                "y_tick_max must not be negative, got {}",
                self.y_tick_max
            )));
        }
        if !matches!(self.chart_extension.as_str(), "png" | "svg") {
            return Err(BenchError::ConfigError(format!(
                "Unsupported chart extension {:?}, expected png or svg",
                self.chart_extension
            )));
        }
        for case in &self.cases {
            if case.is_empty() || case.contains(|c: char| c == '/' || c == '\\') {
                return Err(BenchError::ConfigError(format!(
                    "Invalid case name {:?}",
                    case
                )));
            }
        }
        Ok(())
    }

    /// Narrow the configured cases down to `names`, preserving the order in
    /// which they were requested. An empty selection keeps every case.
    pub fn select_cases(&mut self, names: &[String]) -> BenchResult<()> {
        if names.is_empty() {
            return Ok(());
        }
        for name in names {
            if !self.cases.contains(name) {
                return Err(BenchError::UnknownCase(name.clone()));
            }
        }
        self.cases = names.to_vec();
        Ok(())
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
