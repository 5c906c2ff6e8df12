pub mod benchmark_runner;
pub mod result_collector;
pub mod suite_runner;

// Re-export for easier usage
pub use result_collector::ResultCollector;
