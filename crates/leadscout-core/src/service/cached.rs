//! The memoization wrapper around upstream fetches.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache_key::CacheOp;
use crate::error::FetchResult;
use crate::ports::Cache;

/// Wraps upstream calls in get-or-compute caching against an injected
/// backend.
///
/// Failures are returned to the caller and never stored, so a transient
/// upstream error cannot poison later calls. Concurrent misses on the same
/// key may each invoke the upstream call; the resulting writes are
/// idempotent overwrites of equivalent data, so no single-flight
/// deduplication is performed.
#[derive(Clone)]
pub struct CachedFetch {
    cache: Arc<dyn Cache>,
}

impl CachedFetch {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }

    /// Return the cached value for `op` if present, otherwise run `compute`
    /// and store its successful result under the op's key and TTL.
    pub async fn get_or_compute<T, F, Fut>(&self, op: CacheOp<'_>, compute: F) -> FetchResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = FetchResult<T>>,
    {
        let key = op.key();

        if let Some(raw) = self.cache.get(&key).await {
            match serde_json::from_str(&raw) {
                Ok(value) => {
                    tracing::debug!(key = %key, "cache hit");
                    return Ok(value);
                }
                Err(e) => {
                    // A stored value that no longer decodes is treated as
                    // a miss and recomputed.
                    tracing::warn!(key = %key, error = %e, "discarding undecodable cache entry");
                }
            }
        }

        tracing::debug!(key = %key, "cache miss");
        let value = compute().await?;

        match serde_json::to_string(&value) {
            Ok(raw) => {
                if let Err(e) = self.cache.set(&key, &raw, Some(op.ttl())).await {
                    tracing::warn!(key = %key, error = %e, "cache write failed");
                }
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "value not serializable, skipping cache write");
            }
        }

        Ok(value)
    }

    /// Run a call that has no cache operation: the future is invoked
    /// untouched and nothing is stored. This is the deliberate fallback
    /// for anything outside the enumerated operation set.
    pub async fn passthrough<T, F, Fut>(&self, compute: F) -> FetchResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = FetchResult<T>>,
    {
        compute().await
    }
}
