//! API Handlers
//!
//! HTTP request handlers. Each handler extracts only the services it uses.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    Json,
};

use crate::cache::{self, CacheStore, SharedCache, Timestamp};
use crate::config::Config;
use crate::data::DataService;
use crate::log::LogService;
use crate::models::{HealthResponse, StatsResponse};

/// Body of `GET /`.
pub const DEFAULT_BODY: &str = "memo_cache is running";

/// Body of `GET /clearcache`, also logged at info level.
pub const CACHE_CLEARED: &str = "Cache cleared.";

/// Application state shared across all handlers.
///
/// Built once at startup; every field is a handle to a single instance.
#[derive(Clone)]
pub struct AppState {
    /// Logger
    pub log: LogService,
    /// Shared cache store
    pub cache: SharedCache,
    /// Data service reading through the cache
    pub data: Arc<DataService>,
}

impl AppState {
    /// Wires the data service onto an existing cache and logger.
    pub fn new(log: LogService, cache: SharedCache) -> Self {
        let data = Arc::new(DataService::new(cache.clone(), log));
        Self { log, cache, data }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wiring order: log, cache, data.
    pub fn from_config(config: &Config) -> Self {
        let log = LogService::from_config(config);
        let cache = cache::shared(CacheStore::new(log, config.log_cache_misses));
        Self::new(log, cache)
    }
}

impl FromRef<AppState> for LogService {
    fn from_ref(state: &AppState) -> Self {
        state.log
    }
}

impl FromRef<AppState> for SharedCache {
    fn from_ref(state: &AppState) -> Self {
        state.cache.clone()
    }
}

impl FromRef<AppState> for Arc<DataService> {
    fn from_ref(state: &AppState) -> Self {
        state.data.clone()
    }
}

/// Renders a lookup result, `null` when there is none.
pub fn render_value(value: Option<Timestamp>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

/// Handler for GET /
pub async fn default_handler() -> &'static str {
    DEFAULT_BODY
}

/// Handler for GET /find/:key
///
/// Always answers 200; an illegal key renders as `null`.
pub async fn find_handler(
    State(data): State<Arc<DataService>>,
    Path(key): Path<String>,
) -> String {
    let result = data.get_data(&key).await;
    format!("data for key: {}", render_value(result))
}

/// Handler for GET /clearcache
pub async fn clear_cache_handler(
    State(cache): State<SharedCache>,
    State(log): State<LogService>,
) -> &'static str {
    cache.write().await.clear();
    log.info(CACHE_CLEARED);
    CACHE_CLEARED
}

/// Handler for GET /dumpcache
pub async fn dump_cache_handler(State(cache): State<SharedCache>) -> String {
    let dump = cache.read().await.dump();
    format!("Cache dump:\n{}", dump)
}

/// Handler for GET /stats
pub async fn stats_handler(State(cache): State<SharedCache>) -> Json<StatsResponse> {
    let stats = cache.read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
