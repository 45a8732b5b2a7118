use anyhow::Context;
use log::warn;
use matmulcore::math::{expected_cell, MatrixStore};
use matmulcore::processing::{Initializer, Multiplier};
use matmulcore::telemetry::{LogManager, Stopwatch};
use matmulcore::{BenchConfig, BenchReport, MatrixStage};

pub struct Runner {
    config: BenchConfig,
    logger: LogManager,
}

impl Runner {
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
        }
    }

    pub fn execute(&self) -> anyhow::Result<BenchReport> {
        self.config
            .validate()
            .context("validating benchmark configuration")?;

        let dimension = self.config.dimension;
        let mut store = MatrixStore::new(dimension);

        let mut initializer = Initializer::new(self.config.clone());
        initializer
            .execute(&mut store)
            .with_context(|| format!("executing {} stage", initializer.name()))?;

        let mut multiplier = Multiplier::new(self.config.clone());
        let (outcome, elapsed) = Stopwatch::measure(|| multiplier.execute(&mut store))
            .context("timing multiplication")?;
        outcome.with_context(|| format!("executing {} stage", multiplier.name()))?;

        let (row, col) = self.config.probe;
        let value = store
            .cell(row, col)
            .with_context(|| format!("probe C[{}][{}] outside result matrix", row, col))?;

        let expected = expected_cell(row, col, dimension);
        if i64::from(value) == expected {
            self.logger
                .detail(format_args!("C[{}][{}] matches closed form {}", row, col, expected));
        } else {
            warn!(
                "C[{}][{}] = {} but closed form gives {}; i32 accumulation overflowed",
                row, col, value, expected
            );
        }
        self.logger.record(&format!(
            "{}x{} multiply took {:.6}s",
            dimension,
            dimension,
            elapsed.as_secs_f64()
        ));

        Ok(BenchReport {
            probe: (row, col),
            value,
            elapsed,
        })
    }
}
