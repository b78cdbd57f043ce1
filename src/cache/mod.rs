//! Cache Module
//!
//! Process-local key/value cache shared by the data service and the admin routes.

mod stats;
mod store;


use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

// Re-export public types
pub use stats::CacheStats;
pub use store::CacheStore;

/// Value type stored by the lookup service.
pub type Timestamp = DateTime<Utc>;

/// Handle to the single cache instance, shared by every consumer.
pub type SharedCache = Arc<RwLock<CacheStore<Timestamp>>>;

/// Wraps a store into a shareable handle.
pub fn shared(store: CacheStore<Timestamp>) -> SharedCache {
    Arc::new(RwLock::new(store))
}
