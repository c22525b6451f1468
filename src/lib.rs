pub mod adapters;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod timing;

pub use adapters::HttpAdapter;
pub use config::RunConfig;
pub use error::{BenchError, BenchResult};
pub use report::Report;
pub use runner::{post_request, run, standard_lineup, BenchCase};
pub use timing::{BenchTimes, CpuUsage};
