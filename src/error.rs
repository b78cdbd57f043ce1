//! Error types for the lookup service
//!
//! Provides unified error handling using thiserror.

use std::io;

use thiserror::Error;

// == Service Error Enum ==
/// Unified error type for configuration and startup failures.
///
/// Request handling never fails: an invalid key renders as `null` and a
/// cache miss is an ordinary branch.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Log level string is not one of debug, info, error
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Boolean setting could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidFlag { name: &'static str, value: String },

    /// Listener could not be bound
    #[error("Failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },

    /// Server stopped with an I/O error
    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the lookup service.
pub type Result<T> = std::result::Result<T, ServiceError>;
