//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cache;
mod fetchers;

pub use cache::{Cache, CacheError};
pub use fetchers::{AiSummarizer, PlaceDirectory, PlaceSearcher, TrendsProvider, WebsiteAuditor};
