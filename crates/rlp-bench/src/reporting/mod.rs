pub mod chart;
pub mod report_generators;
pub mod types;

pub use chart::ChartSpec;
pub use report_generators::{ChartReportGenerator, ReportGenerator, SummaryReportGenerator};
pub use types::{CaseReport, SuiteSummary};
