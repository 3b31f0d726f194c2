//! Failure taxonomy for upstream fetches.

use thiserror::Error;

/// Errors surfaced by upstream fetchers and everything built on top of them.
///
/// Adapters translate service-specific failures into one of these variants;
/// the cache layer and the score aggregator pass them through unchanged.
/// Every failure is a per-request value, never a process-level fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for all fetcher and aggregation calls.
pub type FetchResult<T> = Result<T, FetchError>;
