use crate::math::matrix::{MatrixHelper, MatrixStore};
use crate::prelude::{BenchConfig, BenchResult, MatrixStage};
use crate::telemetry::log::LogManager;

/// Computes `result = left * right` with the naive O(N³) kernel.
///
/// `result` must be zero on entry; the Initializer guarantees that. The
/// whole of `execute` runs inside the benchmark's timed region, so apart from
/// the kernel it only does an O(1) dimension check and a lazily formatted
/// debug log.
pub struct Multiplier {
    config: BenchConfig,
    logger: LogManager,
}

impl Multiplier {
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
        }
    }
}

impl MatrixStage for Multiplier {
    fn name(&self) -> &'static str {
        "multiplier"
    }

    fn execute(&mut self, store: &mut MatrixStore) -> BenchResult<()> {
        self.config.check_store(store)?;

        let (left, right, result) = store.operands_mut();
        MatrixHelper::multiply_naive(left, right, result)?;

        self.logger.detail(format_args!(
            "multiplied {}x{} operands",
            self.config.dimension, self.config.dimension
        ));
        Ok(())
    }
}
