use crate::math::matrix::MatrixStore;
use crate::prelude::{BenchConfig, BenchResult, MatrixStage};
use crate::telemetry::log::LogManager;

/// Fills `left[i][j] = i + j`, `right[i][j] = i - j` and zeroes `result`.
pub struct Initializer {
    config: BenchConfig,
    logger: LogManager,
}

impl Initializer {
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
        }
    }
}

impl MatrixStage for Initializer {
    fn name(&self) -> &'static str {
        "initializer"
    }

    fn execute(&mut self, store: &mut MatrixStore) -> BenchResult<()> {
        self.config.check_store(store)?;

        let (left, right, result) = store.matrices_mut();
        for ((i, j), value) in left.indexed_iter_mut() {
            *value = (i + j) as i32;
        }
        for ((i, j), value) in right.indexed_iter_mut() {
            *value = i as i32 - j as i32;
        }
        result.fill(0);

        self.logger.detail(format_args!(
            "filled {}x{} operands",
            self.config.dimension, self.config.dimension
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn initialized(dimension: usize) -> MatrixStore {
        let mut store = MatrixStore::new(dimension);
        Initializer::new(BenchConfig::new(dimension, (0, 0)))
            .execute(&mut store)
            .unwrap();
        store
    }

    #[test]
    fn initializer_fills_index_pattern() {
        let store = initialized(3);
        assert_eq!(store.left(), array![[0, 1, 2], [1, 2, 3], [2, 3, 4]]);
        assert_eq!(store.right(), array![[0, -1, -2], [1, 0, -1], [2, 1, 0]]);
        assert!(store.result().iter().all(|&v| v == 0));
    }

    #[test]
    fn operands_satisfy_sum_and_difference_laws() {
        let store = initialized(17);
        let (left, right) = (store.left(), store.right());
        for i in 0..17 {
            for j in 0..17 {
                assert_eq!(left[[i, j]] - right[[i, j]], 2 * j as i32);
                assert_eq!(left[[i, j]] + right[[i, j]], 2 * i as i32);
            }
        }
    }

    #[test]
    fn initializer_is_idempotent_and_clears_result() {
        let once = initialized(5);

        let mut twice = initialized(5);
        twice.operands_mut().2.fill(42);
        let mut stage = Initializer::new(BenchConfig::new(5, (0, 0)));
        stage.execute(&mut twice).unwrap();

        assert_eq!(once.left(), twice.left());
        assert_eq!(once.right(), twice.right());
        assert!(twice.result().iter().all(|&v| v == 0));
    }

    #[test]
    fn initializer_rejects_store_of_other_dimension() {
        let mut store = MatrixStore::new(2);
        let mut stage = Initializer::new(BenchConfig::new(3, (0, 0)));
        assert!(stage.execute(&mut store).is_err());
    }
}
