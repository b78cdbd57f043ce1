//! Log Service Module
//!
//! Level-filtered line logger used by the cache, the data service and the
//! admin routes. Lines are emitted as `tracing` events so the process
//! subscriber decides where they end up (stdout in the binary).

mod level;

#[cfg(test)]
pub(crate) mod capture;

pub use level::LogLevel;

use crate::config::Config;

/// Prefix carried by every emitted line.
pub const LINE_PREFIX: &str = "log service: ";

// == Log Service ==
/// Emits a message only when its level is at or above the threshold.
#[derive(Debug, Clone, Copy)]
pub struct LogService {
    threshold: LogLevel,
}

impl LogService {
    // == Constructor ==
    /// Creates a logger with the given threshold.
    pub fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }

    /// Creates a logger whose threshold is the configured log level.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.log_level)
    }

    /// Returns the configured threshold.
    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Returns true if a message at `level` would be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.threshold
    }

    pub fn debug(&self, msg: &str) {
        self.write(LogLevel::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.write(LogLevel::Info, msg);
    }

    pub fn error(&self, msg: &str) {
        self.write(LogLevel::Error, msg);
    }

    // == Write ==
    /// Emits `"log service: " + msg` at the tracing level matching `level`.
    fn write(&self, level: LogLevel, msg: &str) {
        if !self.enabled(level) {
            return;
        }

        match level {
            LogLevel::Debug => tracing::debug!("{}{}", LINE_PREFIX, msg),
            LogLevel::Info => tracing::info!("{}{}", LINE_PREFIX, msg),
            LogLevel::Error => tracing::error!("{}{}", LINE_PREFIX, msg),
        }
    }
}

impl Default for LogService {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}
