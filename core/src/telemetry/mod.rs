pub mod log;
pub mod timer;

pub use log::LogManager;
pub use timer::{Stopwatch, StopwatchState};
