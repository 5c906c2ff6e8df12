use crate::bench_config::BenchRunConfig;
use crate::errors::BenchResult;
use crate::reporting::{CaseReport, ReportGenerator, SummaryReportGenerator};
use crate::runners::benchmark_runner::BenchmarkRunner;
use crate::work_dir::BenchCase;
use tracing::info;

/// Runs every configured case in order.
///
/// The first failing case aborts the run: later cases are never started and
/// no summary is written. Charts of cases that already finished stay on disk.
pub struct SuiteRunner {
    runner: BenchmarkRunner,
}

impl SuiteRunner {
    pub fn new(config: BenchRunConfig) -> Self {
        Self::from_runner(BenchmarkRunner::new(config))
    }

    pub fn from_runner(runner: BenchmarkRunner) -> Self {
        Self { runner }
    }

    pub fn cases(&self) -> Vec<BenchCase> {
        self.runner
            .config()
            .cases
            .iter()
            .map(|name| BenchCase::new(name.as_str()))
            .collect()
    }

    pub fn run(&self) -> BenchResult<Vec<CaseReport>> {
        let cases = self.cases();
        let config = self.runner.config();
        info!(
            "Running {} cases with {} trials per build",
            cases.len(),
            config.trials
        );

        let mut reports = Vec::with_capacity(cases.len());
        for (index, case) in cases.iter().enumerate() {
            info!("[{}/{}] {}", index + 1, cases.len(), case);
            reports.push(self.runner.measure_and_plot(case)?);
        }

        if config.write_summary {
            SummaryReportGenerator::new(&config.summary_filename)
                .generate(&reports, self.runner.work_dir())?;
        }

        Ok(reports)
    }
}
