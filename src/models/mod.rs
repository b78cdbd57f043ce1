//! Response models for the JSON endpoints
//!
//! The lookup and admin routes answer in plain text; only the supplementary
//! stats and health endpoints serialize a body.

pub mod responses;

pub use responses::{HealthResponse, StatsResponse};
