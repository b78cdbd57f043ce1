//! Cache Store Module
//!
//! Key/value storage with miss logging and hit/miss statistics.

use std::collections::HashMap;
use std::fmt::{self, Write};

use crate::cache::CacheStats;
use crate::config::Config;
use crate::log::LogService;

// == Cache Store ==
/// In-memory cache mapping string keys to values of type `V`.
///
/// Lives for the whole process; nothing is evicted or persisted.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, V>,
    /// Performance statistics
    stats: CacheStats,
    /// Logger used for miss lines
    log: LogService,
    /// Whether a miss emits an info line
    log_misses: bool,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `log` - Logger receiving miss lines
    /// * `log_misses` - Emit `"Cache miss for key: ..."` on every miss
    pub fn new(log: LogService, log_misses: bool) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            log,
            log_misses,
        }
    }

    /// Creates an empty store from the service configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(LogService::from_config(config), config.log_cache_misses)
    }

    // == Set ==
    /// Stores a value, overwriting any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), value);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes every entry. Hit and miss counters are kept.
    pub fn clear(&mut self) {
        self.entries = HashMap::new();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the key is present, without touching statistics or
    /// logging a miss.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Retrieves a copy of the value stored under `key`.
    ///
    /// A miss is counted and, if enabled, logged at info level.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                if self.log_misses {
                    self.log.info(&format!("Cache miss for key: {}", key));
                }
                None
            }
        }
    }
}

impl<V: fmt::Display> CacheStore<V> {
    // == Dump ==
    /// Renders every entry as `{ "key": value, ... }`, keys sorted.
    ///
    /// An empty store renders as `{}`.
    pub fn dump(&self) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }

        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();

        let mut out = String::from("{ ");
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            // Writing to a String cannot fail.
            let _ = write!(out, "{:?}: {}", key, self.entries[key]);
        }
        out.push_str(" }");
        out
    }
}
