use crate::errors::{BenchError, BenchResult};
use crate::output_parser::{parse_value, LineKind};
use crate::reporting::CaseReport;
use crate::toolchain::BuildVariant;
use tracing::{trace, warn};

/// Accumulates samples from the trials of one case
pub struct ResultCollector {
    report: CaseReport,
    echo_output: bool,
}

impl ResultCollector {
    pub fn new(case: impl Into<String>, echo_output: bool) -> Self {
        Self {
            report: CaseReport::new(case),
            echo_output,
        }
    }

    /// Scan the output of one trial.
    ///
    /// `spent time` lines feed the series of `variant`. The RLP encode count
    /// is only taken from old-build output, and only the first time it is
    /// seen; later RLP lines are neither stored nor parsed.
    pub fn record(&mut self, variant: BuildVariant, output: &str) -> BenchResult<()> {
        for line in output.lines() {
            if self.echo_output {
                println!("{}", line);
            }
            trace!("{} [{}] {}", self.report.case, variant, line);

            match LineKind::of(line) {
                LineKind::SpentTime => {
                    let sample = self.parse(line)?;
                    self.series_mut(variant).push(sample);
                }
                LineKind::RlpEncodingTimes
                    if variant == BuildVariant::Old && self.report.rlp_count.is_none() =>
                {
                    self.report.rlp_count = Some(self.parse(line)?);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Check that both series are complete and hand back the report
    pub fn finish(self, trials: usize) -> BenchResult<CaseReport> {
        for (variant, series) in [
            (BuildVariant::Old, &self.report.old),
            (BuildVariant::New, &self.report.new),
        ] {
            if series.len() != trials {
                return Err(BenchError::SampleCount {
                    case: self.report.case.clone(),
                    variant,
                    expected: trials,
                    actual: series.len(),
                });
            }
        }

        if self.report.rlp_count.is_none() {
            warn!(
                "{} never reported an rlp encoding count; titling its chart with a placeholder",
                self.report.case
            );
        }
        Ok(self.report)
    }

    #[cfg(test)]
    fn samples(&self, variant: BuildVariant) -> &[i64] {
        match variant {
            BuildVariant::Old => &self.report.old,
            BuildVariant::New => &self.report.new,
        }
    }

    #[cfg(test)]
    fn rlp_count(&self) -> Option<i64> {
        self.report.rlp_count
    }

    fn series_mut(&mut self, variant: BuildVariant) -> &mut Vec<i64> {
        match variant {
            BuildVariant::Old => &mut self.report.old,
            BuildVariant::New => &mut self.report.new,
        }
    }

    fn parse(&self, line: &str) -> BenchResult<i64> {
        parse_value(line).map_err(|source| BenchError::ParseError {
            case: self.report.case.clone(),
            source,
        })
    }
}
