pub mod bench_config;
pub mod errors;
pub mod output_parser;
pub mod reporting;
pub mod runners;
pub mod toolchain;
pub mod work_dir;

// Re-export main components for easier use
pub use bench_config::BenchRunConfig;
pub use errors::{BenchError, BenchResult};
pub use runners::benchmark_runner::BenchmarkRunner;
pub use runners::suite_runner::SuiteRunner;
pub use toolchain::{BuildVariant, CommandToolchain, Toolchain};
pub use work_dir::BenchCase;
