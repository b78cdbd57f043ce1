//! Data Service Module
//!
//! Resolves keys to values, memoized by the shared cache.

use chrono::Utc;

use crate::cache::{SharedCache, Timestamp};
use crate::log::LogService;

/// Key rejected by the data service.
pub const ILLEGAL_KEY: &str = "illegal key";

// == Data Service ==
/// Resolves a key to a timestamp, computing it once per key until the cache
/// is cleared.
#[derive(Debug, Clone)]
pub struct DataService {
    cache: SharedCache,
    log: LogService,
}

impl DataService {
    pub fn new(cache: SharedCache, log: LogService) -> Self {
        Self { cache, log }
    }

    // == Get Data ==
    /// Returns the value for `key`, or `None` for the illegal key.
    ///
    /// The illegal key is rejected before the cache is consulted, so it never
    /// produces a miss line or an entry.
    pub async fn get_data(&self, key: &str) -> Option<Timestamp> {
        self.log.debug(&format!("calling getData with key {}", key));

        if key == ILLEGAL_KEY {
            self.log.error(ILLEGAL_KEY);
            return None;
        }

        // Write lock: a lookup updates statistics
        let mut cache = self.cache.write().await;
        if let Some(value) = cache.get(key) {
            return Some(value);
        }

        let value = Utc::now();
        cache.set(key, value);
        Some(value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{self, CacheStore};
    use crate::log::capture::CapturedLines;
    use crate::log::LogLevel;
    use std::time::Duration;

    fn service(log_misses: bool) -> (DataService, SharedCache) {
        let log = LogService::new(LogLevel::Debug);
        let cache = cache::shared(CacheStore::new(log, log_misses));
        (DataService::new(cache.clone(), log), cache)
    }

    #[tokio::test]
    async fn test_get_data_memoizes() {
        let (data, cache) = service(false);

        let first = data.get_data("abc").await;
        let second = data.get_data("abc").await;

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(cache.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_illegal_key_returns_none() {
        let (data, cache) = service(true);

        assert!(data.get_data(ILLEGAL_KEY).await.is_none());
        assert!(data.get_data(ILLEGAL_KEY).await.is_none());

        let cache = cache.read().await;
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 0);
    }

    #[tokio::test]
    async fn test_illegal_key_log_lines() {
        let captured = CapturedLines::new();
        let _guard = captured.install();
        let (data, _) = service(true);

        data.get_data(ILLEGAL_KEY).await;

        assert_eq!(
            captured.lines(),
            vec![
                "log service: calling getData with key illegal key".to_string(),
                "log service: illegal key".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_first_lookup_logs_miss() {
        let captured = CapturedLines::new();
        let _guard = captured.install();
        let (data, _) = service(true);

        data.get_data("abc").await;
        data.get_data("abc").await;

        assert_eq!(captured.count("calling getData with key abc"), 2);
        assert_eq!(captured.count("Cache miss for key: abc"), 1);
    }

    #[tokio::test]
    async fn test_clear_forces_recompute() {
        let (data, cache) = service(false);

        let first = data.get_data("abc").await;
        cache.write().await.clear();
        tokio::time::sleep(Duration::from_millis(2)).await;
        let second = data.get_data("abc").await;

        assert!(second.is_some());
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_value_is_stored_in_cache() {
        let (data, cache) = service(false);

        let value = data.get_data("key").await;

        assert_eq!(cache.write().await.get("key"), value);
    }
}
