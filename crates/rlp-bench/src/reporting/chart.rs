use crate::errors::{BenchError, BenchResult};
use crate::reporting::types::CaseReport;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;

pub const OLD_COLOR: RGBColor = RGBColor(0, 128, 0);
pub const NEW_COLOR: RGBColor = RGBColor(255, 0, 0);
pub const X_LABEL: &str = "times";
pub const Y_LABEL: &str = "elapsed time";

/// One labelled line on the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub color: RGBColor,
    pub points: Vec<(i64, i64)>,
}

/// Layout of an old/new comparison chart, independent of the backend
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_ticks: Vec<i64>,
    pub y_ticks: Vec<i64>,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    /// Trials are numbered from 1 on the x axis; the y axis carries a tick
    /// at every integer from 0 to `y_tick_max`.
    pub fn from_report(report: &CaseReport, y_tick_max: i64) -> Self {
        let trials = report.old.len().max(report.new.len()) as i64;
        let points = |samples: &[i64]| -> Vec<(i64, i64)> {
            samples
                .iter()
                .enumerate()
                .map(|(i, &sample)| (i as i64 + 1, sample))
                .collect()
        };

        ChartSpec {
            title: report.title(),
            x_ticks: (1..=trials).collect(),
            y_ticks: (0..=y_tick_max).collect(),
            series: vec![
                ChartSeries {
                    label: "old",
                    color: OLD_COLOR,
                    points: points(&report.old),
                },
                ChartSeries {
                    label: "new",
                    color: NEW_COLOR,
                    points: points(&report.new),
                },
            ],
        }
    }

    fn x_range(&self) -> (i64, i64) {
        let first = self.x_ticks.first().copied().unwrap_or(1);
        let last = self.x_ticks.last().copied().unwrap_or(first);
        // a single trial still needs a non-empty axis
        (first, last.max(first + 1))
    }

    /// Axis covers every tick and every sample
    fn y_range(&self) -> (i64, i64) {
        let samples = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1));
        let low = self
            .y_ticks
            .iter()
            .copied()
            .chain(samples.clone())
            .min()
            .unwrap_or(0);
        let high = self.y_ticks.iter().copied().chain(samples).max().unwrap_or(0);
        (low, high.max(low + 1))
    }

    /// Draw onto `path`; a `.svg` extension selects the SVG backend, anything
    /// else is written as a bitmap.
    pub fn render(&self, path: &Path, size: (u32, u32)) -> BenchResult<()> {
        let is_svg = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));

        let result = if is_svg {
            let root = SVGBackend::new(path, size).into_drawing_area();
            self.draw(root).map_err(|e| e.to_string())
        } else {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            self.draw(root).map_err(|e| e.to_string())
        };

        result.map_err(|message| BenchError::ChartError {
            path: path.to_path_buf(),
            message,
        })
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let (x_low, x_high) = self.x_range();
        let (y_low, y_high) = self.y_range();

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_low..x_high, y_low..y_high)?;

        chart
            .configure_mesh()
            .x_labels(self.x_ticks.len().max(2))
            .y_labels(self.y_ticks.len().max(2))
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .draw()?;

        for series in &self.series {
            let color = series.color;
            chart
                .draw_series(LineSeries::new(series.points.iter().copied(), &color))?
                .label(series.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}
