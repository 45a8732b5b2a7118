use crate::prelude::{BenchError, BenchResult};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchState {
    NotStarted,
    Running,
    Completed,
}

/// One-shot monotonic stopwatch around a scoped region.
///
/// Moves `NotStarted -> Running -> Completed` and never back.
#[derive(Debug, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    elapsed: Option<Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StopwatchState {
        match (self.started, self.elapsed) {
            (_, Some(_)) => StopwatchState::Completed,
            (Some(_), None) => StopwatchState::Running,
            (None, None) => StopwatchState::NotStarted,
        }
    }

    pub fn start(&mut self) -> BenchResult<()> {
        if self.state() != StopwatchState::NotStarted {
            return Err(BenchError::ClockUnavailable(format!(
                "cannot start stopwatch in state {:?}",
                self.state()
            )));
        }
        self.started = Some(Instant::now());
        Ok(())
    }

    /// Takes the second reading and returns the elapsed time.
    pub fn stop(&mut self) -> BenchResult<Duration> {
        let started = match (self.state(), self.started) {
            (StopwatchState::Running, Some(started)) => started,
            (state, _) => {
                return Err(BenchError::ClockUnavailable(format!(
                    "cannot stop stopwatch in state {:?}",
                    state
                )))
            }
        };
        let elapsed = Instant::now()
            .checked_duration_since(started)
            .ok_or_else(|| BenchError::ClockUnavailable("monotonic clock went backwards".into()))?;
        self.elapsed = Some(elapsed);
        Ok(elapsed)
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Runs `work` between a start and a stop reading.
    pub fn measure<T, F>(work: F) -> BenchResult<(T, Duration)>
    where
        F: FnOnce() -> T,
    {
        let mut stopwatch = Self::new();
        stopwatch.start()?;
        let value = work();
        let elapsed = stopwatch.stop()?;
        Ok((value, elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwatch_walks_through_states() {
        let mut stopwatch = Stopwatch::new();
        assert_eq!(stopwatch.state(), StopwatchState::NotStarted);
        assert_eq!(stopwatch.elapsed(), None);

        stopwatch.start().unwrap();
        assert_eq!(stopwatch.state(), StopwatchState::Running);

        let elapsed = stopwatch.stop().unwrap();
        assert_eq!(stopwatch.state(), StopwatchState::Completed);
        assert_eq!(stopwatch.elapsed(), Some(elapsed));
    }

    #[test]
    fn stopwatch_rejects_out_of_order_calls() {
        let mut stopwatch = Stopwatch::new();
        assert!(matches!(
            stopwatch.stop(),
            Err(BenchError::ClockUnavailable(_))
        ));

        stopwatch.start().unwrap();
        assert!(stopwatch.start().is_err());
        stopwatch.stop().unwrap();
        assert!(stopwatch.start().is_err());
        assert!(stopwatch.stop().is_err());
    }

    #[test]
    fn measured_duration_is_finite_and_non_negative() {
        let (sum, elapsed) = Stopwatch::measure(|| (0..1_000u64).sum::<u64>()).unwrap();
        assert_eq!(sum, 499_500);
        let seconds = elapsed.as_secs_f64();
        assert!(seconds.is_finite());
        assert!(seconds >= 0.0);
    }

    #[test]
    fn measured_duration_covers_the_work() {
        let pause = Duration::from_millis(5);
        let ((), elapsed) = Stopwatch::measure(|| std::thread::sleep(pause)).unwrap();
        assert!(elapsed >= pause);
    }
}
