use crate::bench_config::BenchRunConfig;
use crate::errors::BenchResult;
use crate::reporting::{CaseReport, ChartReportGenerator, ReportGenerator};
use crate::runners::result_collector::ResultCollector;
use crate::toolchain::{BuildVariant, CommandToolchain, Toolchain};
use crate::work_dir::{BenchCase, CaseWorkDir};
use std::slice;
use tracing::{debug, info};

/// Measures one case: builds both variants, runs each a fixed number of
/// times and charts the result.
pub struct BenchmarkRunner {
    config: BenchRunConfig,
    work_dir: CaseWorkDir,
    toolchain: Box<dyn Toolchain>,
    charts: ChartReportGenerator,
}

impl BenchmarkRunner {
    /// Runner driving the configured compiler and test runner
    pub fn new(config: BenchRunConfig) -> Self {
        let toolchain = CommandToolchain::from_config(&config);
        Self::with_toolchain(config, Box::new(toolchain))
    }

    pub fn with_toolchain(config: BenchRunConfig, toolchain: Box<dyn Toolchain>) -> Self {
        let work_dir = CaseWorkDir::new(&config.case_dir, &config.output_dir);
        let charts = ChartReportGenerator::from_config(&config);
        Self {
            config,
            work_dir,
            toolchain,
            charts,
        }
    }

    pub fn config(&self) -> &BenchRunConfig {
        &self.config
    }

    pub fn work_dir(&self) -> &CaseWorkDir {
        &self.work_dir
    }

    /// Build and run the old variant, then the new one, collecting samples.
    pub fn measure(&self, case: &BenchCase) -> BenchResult<CaseReport> {
        let trials = self.config.trials;
        let mut collector = ResultCollector::new(case.name(), self.config.echo_output);

        for variant in [BuildVariant::Old, BuildVariant::New] {
            self.toolchain.build(case, variant)?;

            for trial in 1..=trials {
                debug!("{} {} trial {}/{}", case, variant, trial, trials);
                let output = self.toolchain.execute(case)?;
                collector.record(variant, &output)?;
            }
        }

        collector.finish(trials)
    }

    /// Measure `case` and save its chart to `<output_dir>/<case>.<ext>`.
    pub fn measure_and_plot(&self, case: &BenchCase) -> BenchResult<CaseReport> {
        info!("Measuring {}", case);
        let mut report = self.measure(case)?;

        self.charts.generate(slice::from_ref(&report), &self.work_dir)?;
        report.chart = Some(self.work_dir.chart(case, self.charts.extension()));

        info!(
            "{}: old mean {:.2}, new mean {:.2}",
            case,
            report.old_mean().unwrap_or_default(),
            report.new_mean().unwrap_or_default()
        );
        Ok(report)
    }
}
