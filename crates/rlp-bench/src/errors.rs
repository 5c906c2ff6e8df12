use crate::output_parser::ParseError;
use crate::toolchain::BuildVariant;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the benchmark runner
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Failed to load configuration: {0}")]
    ConfigError(String),

    #[error("Unknown benchmark case: {0}")]
    UnknownCase(String),

    #[error("Failed to launch {program}: {source}")]
    SpawnError {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Build of {case} ({variant}) failed with status {status}: {stderr}")]
    BuildFailed {
        case: String,
        variant: BuildVariant,
        status: String,
        stderr: String,
    },

    #[error("Failed to parse output of {case}: {source}")]
    ParseError {
        case: String,
        #[source]
        source: ParseError,
    },

    #[error("Expected {expected} {variant} samples for {case}, collected {actual}")]
    SampleCount {
        case: String,
        variant: BuildVariant,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to render chart {path}: {message}")]
    ChartError { path: PathBuf, message: String },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to write JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl BenchError {
    /// Short label for the failing stage, used by the driver's failure message
    pub fn category(&self) -> &'static str {
        match self {
            BenchError::ConfigError(_) | BenchError::UnknownCase(_) => "configuration",
            BenchError::SpawnError { .. } | BenchError::BuildFailed { .. } => "build",
            BenchError::ParseError { .. } | BenchError::SampleCount { .. } => "parse",
            BenchError::ChartError { .. } => "chart",
            BenchError::FileNotFound(_) | BenchError::JsonError(_) | BenchError::IoError(_) => {
                "I/O"
            }
        }
    }
}

/// Result type for benchmark operations
pub type BenchResult<T> = Result<T, BenchError>;

/// Utility functions for working with BenchError
pub mod util {
    use super::*;
    use std::path::Path;

    /// Check if a file exists, returning a FileNotFound error if it doesn't
    pub fn ensure_file_exists<P: AsRef<Path>>(path: P) -> BenchResult<()> {
        let path_ref = path.as_ref();
        if !path_ref.is_file() {
            return Err(BenchError::FileNotFound(path_ref.to_path_buf()));
        }
        Ok(())
    }
}

impl From<config::ConfigError> for BenchError {
    fn from(err: config::ConfigError) -> Self {
        BenchError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_discriminates_stages() {
        let build = BenchError::BuildFailed {
            case: "bigint_one".to_string(),
            variant: BuildVariant::Old,
            status: "exit status: 1".to_string(),
            stderr: "no such file".to_string(),
        };
        assert_eq!(build.category(), "build");

        let parse = BenchError::ParseError {
            case: "bigint_one".to_string(),
            source: ParseError::MissingDelimiter("spent time".to_string()),
        };
        assert_eq!(parse.category(), "parse");

        let io = BenchError::IoError(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(io.category(), "I/O");
    }

    #[test]
    fn test_ensure_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing_test.cpp");
        assert!(matches!(
            util::ensure_file_exists(&missing),
            Err(BenchError::FileNotFound(p)) if p == missing
        ));

        std::fs::write(&missing, "int main() {}").unwrap();
        assert!(util::ensure_file_exists(&missing).is_ok());

        // directories are not source files
        assert!(util::ensure_file_exists(dir.path()).is_err());
    }
}
