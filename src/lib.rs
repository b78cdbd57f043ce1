//! Memo Cache - A small HTTP lookup service
//!
//! Resolves keys to timestamps, memoized by a process-local cache, with
//! administrative endpoints to clear and dump that cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod log;
pub mod models;
pub mod server;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, ServiceError};
