//! Application state - shared across all handlers.

use std::sync::Arc;

use leadscout_core::ports::Cache;
use leadscout_core::service::BusinessService;
use leadscout_infra::cache::{InMemoryCache, RedisCache, RedisConfig};
use leadscout_infra::clients::{
    GeminiSummarizer, GooglePlacesClient, HttpWebsiteAuditor, TrendsApiClient,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BusinessService>,
}

impl AppState {
    /// Build the application state: one shared HTTP client, the cache
    /// backend, and the upstream clients wired into the service.
    pub async fn new(config: &AppConfig) -> Self {
        let cache = Self::build_cache().await;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("HTTP client builder failed ({e}), using defaults");
                reqwest::Client::new()
            });

        let places = Arc::new(GooglePlacesClient::new(
            http.clone(),
            config.google_api_key.clone(),
        ));
        let auditor = Arc::new(HttpWebsiteAuditor::new(http.clone()));
        let trends = Arc::new(TrendsApiClient::new(
            http.clone(),
            config.trends_api_url.clone(),
        ));
        let summarizer = Arc::new(GeminiSummarizer::new(
            http,
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
        ));

        let service = Arc::new(BusinessService::new(
            cache,
            places.clone(),
            places,
            auditor,
            trends,
            summarizer,
        ));

        tracing::info!("Application state initialized");

        Self { service }
    }

    /// Redis when reachable, in-memory otherwise.
    async fn build_cache() -> Arc<dyn Cache> {
        let redis_config = RedisConfig::from_env();
        let fallback = redis_config.fallback_to_memory;

        match RedisCache::new(redis_config).await {
            Ok(cache) => Arc::new(cache),
            Err(e) => {
                if fallback {
                    tracing::warn!("Redis unavailable ({e}), using in-memory cache");
                } else {
                    tracing::error!(
                        "Redis unavailable ({e}) and fallback disabled, using in-memory cache anyway"
                    );
                }
                Arc::new(InMemoryCache::new())
            }
        }
    }
}
