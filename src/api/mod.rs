//! API Module
//!
//! HTTP handlers and routing for the lookup service.
//!
//! # Endpoints
//! - `GET /` - Static placeholder
//! - `GET /find/:key` - Look up a key through the cache
//! - `GET /clearcache` - Empty the cache
//! - `GET /dumpcache` - Render the cache contents
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
