//! Core of the naive dense matrix-multiply micro-benchmark.
//!
//! Three square integer matrices are allocated together, filled with a
//! deterministic index pattern, multiplied with the textbook triple loop and
//! timed around the multiply only.

pub mod math;
pub mod prelude;
pub mod processing;
pub mod report;
pub mod telemetry;

pub use math::MatrixStore;
pub use prelude::{BenchConfig, BenchError, BenchResult, MatrixStage};
pub use report::BenchReport;
