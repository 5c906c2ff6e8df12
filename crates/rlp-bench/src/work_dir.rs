use crate::errors::BenchResult;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A named benchmark scenario, e.g. `bigint_one`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BenchCase {
    name: String,
}

impl BenchCase {
    pub fn new(name: impl Into<String>) -> Self {
        BenchCase { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for BenchCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Resolves where a case's files live.
///
/// All paths handed out are absolute, so external tools can be pointed at
/// them without changing the process working directory.
#[derive(Debug, Clone)]
pub struct CaseWorkDir {
    case_dir: PathBuf,
    output_dir: PathBuf,
}

impl CaseWorkDir {
    pub fn new(case_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        CaseWorkDir {
            case_dir: case_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn case_dir(&self) -> &Path {
        &self.case_dir
    }

    /// `<case_dir>/<case>_test.cpp`
    pub fn source(&self, case: &BenchCase) -> PathBuf {
        self.case_dir.join(format!("{}_test.cpp", case.name()))
    }

    /// `<case_dir>/<case>_test.wasm`, written next to the source by the build
    pub fn wasm(&self, case: &BenchCase) -> PathBuf {
        self.case_dir.join(format!("{}_test.wasm", case.name()))
    }

    /// `<output_dir>/<case>.<extension>`
    pub fn chart(&self, case: &BenchCase, extension: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", case.name(), extension))
    }

    pub fn output_file(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    pub fn ensure_output_dir(&self) -> BenchResult<()> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_file_naming() {
        let work_dir = CaseWorkDir::new("/bench/case", "/bench");
        let case = BenchCase::new("list_string_two");

        assert_eq!(
            work_dir.source(&case),
            PathBuf::from("/bench/case/list_string_two_test.cpp")
        );
        assert_eq!(
            work_dir.wasm(&case),
            PathBuf::from("/bench/case/list_string_two_test.wasm")
        );
        assert_eq!(
            work_dir.chart(&case, "png"),
            PathBuf::from("/bench/list_string_two.png")
        );
        assert_eq!(case.to_string(), "list_string_two");
    }

    #[test]
    fn test_ensure_output_dir_creates_tree() {
        let root = tempfile::tempdir().unwrap();
        let output = root.path().join("charts").join("latest");
        let work_dir = CaseWorkDir::new(root.path(), &output);

        work_dir.ensure_output_dir().unwrap();
        assert!(output.is_dir());
        // idempotent
        work_dir.ensure_output_dir().unwrap();
    }
}
