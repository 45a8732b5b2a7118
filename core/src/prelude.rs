use crate::math::matrix::MatrixStore;
use serde::{Deserialize, Serialize};

/// Matrix dimension of the reference build.
pub const DEFAULT_DIMENSION: usize = 300;

/// Result cell reported after each run.
pub const DEFAULT_PROBE: (usize, usize) = (100, 100);

const _: () = assert!(DEFAULT_DIMENSION > 0, "matrix dimension must be positive");
const _: () = assert!(
    DEFAULT_PROBE.0 < DEFAULT_DIMENSION && DEFAULT_PROBE.1 < DEFAULT_DIMENSION,
    "probe cell must lie inside the matrix"
);

/// Shared configuration handed to every stage.
///
/// Serde derives let downstream callers persist or compare run settings;
/// the benchmark itself never reads configuration from outside the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    pub dimension: usize,
    pub probe: (usize, usize),
}

impl BenchConfig {
    pub fn new(dimension: usize, probe: (usize, usize)) -> Self {
        Self { dimension, probe }
    }

    /// Rejects a zero dimension or a probe outside `[0, dimension)`.
    pub fn validate(&self) -> BenchResult<()> {
        if self.dimension == 0 {
            return Err(BenchError::Configuration(
                "matrix dimension must be positive".into(),
            ));
        }
        let (row, col) = self.probe;
        if row >= self.dimension || col >= self.dimension {
            return Err(BenchError::Configuration(format!(
                "probe C[{}][{}] lies outside a {}x{} matrix",
                row, col, self.dimension, self.dimension
            )));
        }
        Ok(())
    }

    pub(crate) fn check_store(&self, store: &MatrixStore) -> BenchResult<()> {
        if store.dimension() != self.dimension {
            return Err(BenchError::DimensionMismatch {
                expected: self.dimension,
                actual: store.dimension(),
            });
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION, DEFAULT_PROBE)
    }
}

/// Common error type for the benchmark pipeline.
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("clock unavailable: {0}")]
    ClockUnavailable(String),
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type BenchResult<T> = Result<T, BenchError>;

/// A step of the benchmark that works on the shared matrix store in place.
pub trait MatrixStage {
    fn name(&self) -> &'static str;
    fn execute(&mut self, store: &mut MatrixStore) -> BenchResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_reference_build() {
        let config = BenchConfig::default();
        assert_eq!(config.dimension, 300);
        assert_eq!(config.probe, (100, 100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = BenchConfig::new(0, (0, 0)).validate().unwrap_err();
        assert!(matches!(err, BenchError::Configuration(_)));
    }

    #[test]
    fn probe_outside_matrix_is_rejected() {
        assert!(matches!(
            BenchConfig::new(100, (100, 0)).validate(),
            Err(BenchError::Configuration(_))
        ));
        assert!(matches!(
            BenchConfig::new(100, (0, 100)).validate(),
            Err(BenchError::Configuration(_))
        ));
        assert!(BenchConfig::new(101, (100, 100)).validate().is_ok());
    }

    #[test]
    fn store_of_other_dimension_is_rejected() {
        let config = BenchConfig::new(4, (0, 0));
        let store = MatrixStore::new(3);
        assert!(matches!(
            config.check_store(&store),
            Err(BenchError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }
}
