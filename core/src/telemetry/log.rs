use log::{debug, info};
use std::fmt;

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    /// Debug-level message; `args` is only formatted when debug logging is on.
    pub fn detail(&self, args: fmt::Arguments<'_>) {
        debug!("{}", args);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
