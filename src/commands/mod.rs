//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_letters};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{PlayConfig, run_play};
pub use solve::{SolveResult, solve_letters};
