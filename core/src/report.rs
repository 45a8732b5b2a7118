use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Probed result cell and the time spent multiplying.
///
/// `Serialize` is for callers that archive results; the binary only uses
/// `Display`.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub probe: (usize, usize),
    pub value: i32,
    pub elapsed: Duration,
}

impl BenchReport {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "C[{}][{}] = {}", self.probe.0, self.probe.1, self.value)?;
        write!(f, "Execution Time: {:.6} seconds", self.elapsed_seconds())
    }
}
