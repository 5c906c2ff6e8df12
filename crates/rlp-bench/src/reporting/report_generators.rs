use crate::bench_config::BenchRunConfig;
use crate::errors::BenchResult;
use crate::reporting::chart::ChartSpec;
use crate::reporting::types::{CaseReport, SuiteSummary};
use crate::work_dir::{BenchCase, CaseWorkDir};
use std::fs;
use tracing::info;

/// Trait for report generators
pub trait ReportGenerator {
    fn generate(&self, reports: &[CaseReport], work_dir: &CaseWorkDir) -> BenchResult<()>;
}

/// Renders one old/new comparison chart per case
pub struct ChartReportGenerator {
    extension: String,
    size: (u32, u32),
    y_tick_max: i64,
}

impl ChartReportGenerator {
    pub fn new(extension: impl Into<String>, size: (u32, u32), y_tick_max: i64) -> Self {
        Self {
            extension: extension.into(),
            size,
            y_tick_max,
        }
    }

    pub fn from_config(config: &BenchRunConfig) -> Self {
        Self::new(
            &config.chart_extension,
            (config.chart_width, config.chart_height),
            config.y_tick_max,
        )
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl ReportGenerator for ChartReportGenerator {
    fn generate(&self, reports: &[CaseReport], work_dir: &CaseWorkDir) -> BenchResult<()> {
        work_dir.ensure_output_dir()?;

        for report in reports {
            let path = work_dir.chart(&BenchCase::new(report.case.as_str()), &self.extension);
            ChartSpec::from_report(report, self.y_tick_max).render(&path, self.size)?;
            info!("Saved chart {}", path.display());
        }
        Ok(())
    }
}

/// Writes every case report of a run into one JSON file
pub struct SummaryReportGenerator {
    file_name: String,
}

impl SummaryReportGenerator {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl ReportGenerator for SummaryReportGenerator {
    fn generate(&self, reports: &[CaseReport], work_dir: &CaseWorkDir) -> BenchResult<()> {
        work_dir.ensure_output_dir()?;

        let summary = SuiteSummary::new(reports.to_vec());
        let path = work_dir.output_file(&self.file_name);
        fs::write(&path, serde_json::to_string_pretty(&summary)?)?;

        info!("Wrote summary of {} cases to {}", reports.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reports() -> Vec<CaseReport> {
        ["bigint_one", "string_one"]
            .iter()
            .map(|name| {
                let mut report = CaseReport::new(*name);
                report.old = vec![6, 5, 6];
                report.new = vec![3, 3, 4];
                report.rlp_count = Some(1_000_000);
                report
            })
            .collect()
    }

    #[test]
    fn test_chart_per_case() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("charts");
        let work_dir = CaseWorkDir::new(dir.path(), &output);

        ChartReportGenerator::new("svg", (320, 240), 10)
            .generate(&reports(), &work_dir)
            .unwrap();

        assert!(output.join("bigint_one.svg").is_file());
        assert!(output.join("string_one.svg").is_file());
    }

    #[test]
    fn test_summary_round_trips_reports() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = CaseWorkDir::new(dir.path(), dir.path());

        SummaryReportGenerator::new("summary.json")
            .generate(&reports(), &work_dir)
            .unwrap();

        let content = fs::read_to_string(dir.path().join("summary.json")).unwrap();
        let summary: SuiteSummary = serde_json::from_str(&content).unwrap();
        assert_eq!(summary.cases, reports());
    }
}
