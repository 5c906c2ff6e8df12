use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shown in chart titles when no run reported an RLP encode count
pub const RLP_COUNT_SENTINEL: &str = "n/a";

/// Measurements gathered for one case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub case: String,
    /// `spent time` samples of the old build, in trial order
    pub old: Vec<i64>,
    /// `spent time` samples of the new build, in trial order
    pub new: Vec<i64>,
    /// Encode count reported by the first old-build trial
    pub rlp_count: Option<i64>,
    pub chart: Option<PathBuf>,
}

impl CaseReport {
    pub fn new(case: impl Into<String>) -> Self {
        CaseReport {
            case: case.into(),
            old: Vec::new(),
            new: Vec::new(),
            rlp_count: None,
            chart: None,
        }
    }

    /// `<case> rlp <count> times takes time`
    pub fn title(&self) -> String {
        let count = match self.rlp_count {
            Some(count) => count.to_string(),
            None => RLP_COUNT_SENTINEL.to_string(),
        };
        format!("{} rlp {} times takes time", self.case, count)
    }

    fn mean(samples: &[i64]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }
        Some(samples.iter().sum::<i64>() as f64 / samples.len() as f64)
    }

    pub fn old_mean(&self) -> Option<f64> {
        Self::mean(&self.old)
    }

    pub fn new_mean(&self) -> Option<f64> {
        Self::mean(&self.new)
    }
}

/// Everything written to the run summary file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteSummary {
    pub generated_at: DateTime<Local>,
    pub cases: Vec<CaseReport>,
}

impl SuiteSummary {
    pub fn new(cases: Vec<CaseReport>) -> Self {
        SuiteSummary {
            generated_at: Local::now(),
            cases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_with_count() {
        let mut report = CaseReport::new("bigint_one");
        report.rlp_count = Some(3);
        assert_eq!(report.title(), "bigint_one rlp 3 times takes time");
    }

    #[test]
    fn test_title_without_count_uses_sentinel() {
        let report = CaseReport::new("string_two");
        assert_eq!(report.title(), "string_two rlp n/a times takes time");
    }

    #[test]
    fn test_means() {
        let mut report = CaseReport::new("bigint_one");
        assert_eq!(report.old_mean(), None);
        report.old = vec![4, 6];
        report.new = vec![1, 2, 3];
        assert_eq!(report.old_mean(), Some(5.0));
        assert_eq!(report.new_mean(), Some(2.0));
    }
}
