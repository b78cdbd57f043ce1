//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

use tracing::warn;

use crate::error::{Result, ServiceError};
use crate::log::LogLevel;

/// Service configuration parameters.
///
/// Created once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Threshold of the log service
    pub log_level: LogLevel,
    /// Whether cache misses produce an info line
    pub log_cache_misses: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `LOG_LEVEL` - One of debug, info, error (default: info)
    /// - `LOG_CACHE_MISSES` - Log cache misses (default: true)
    ///
    /// Invalid values are reported and replaced by the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let server_port = match env::var("SERVER_PORT") {
            Ok(v) => v.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid SERVER_PORT={:?}", v);
                defaults.server_port
            }),
            Err(_) => defaults.server_port,
        };

        let log_level = match env::var("LOG_LEVEL") {
            Ok(v) => v.parse().unwrap_or_else(|e: ServiceError| {
                warn!("{}, using {}", e, defaults.log_level);
                defaults.log_level
            }),
            Err(_) => defaults.log_level,
        };

        let log_cache_misses = match env::var("LOG_CACHE_MISSES") {
            Ok(v) => parse_flag("LOG_CACHE_MISSES", &v).unwrap_or_else(|e| {
                warn!("{}, using {}", e, defaults.log_cache_misses);
                defaults.log_cache_misses
            }),
            Err(_) => defaults.log_cache_misses,
        };

        Self {
            server_port,
            log_level,
            log_cache_misses,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            log_level: LogLevel::Info,
            log_cache_misses: true,
        }
    }
}

/// Parses a boolean setting: true/false, 1/0, yes/no, on/off.
pub fn parse_flag(name: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ServiceError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
