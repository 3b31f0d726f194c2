//! # Leadscout Infrastructure
//!
//! Concrete implementations of the ports defined in `leadscout-core`:
//! cache backends and the upstream fetcher clients.
//!
//! ## Feature Flags
//!
//! - `redis` (default) - Redis cache backend; without it only the
//!   in-memory cache is available

pub mod cache;
pub mod clients;

// Re-exports - In-Memory
pub use cache::InMemoryCache;

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use cache::{RedisCache, RedisConfig};

pub use clients::{GeminiSummarizer, GooglePlacesClient, HttpWebsiteAuditor, TrendsApiClient};
