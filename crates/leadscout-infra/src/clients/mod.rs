//! Upstream fetcher clients - the only modules that perform network I/O.
//!
//! Each client implements one core port and translates its service's
//! failures into the generic `FetchError` taxonomy. Request timeouts come
//! from the shared `reqwest::Client` injected at startup; a timed-out call
//! surfaces as `UpstreamUnavailable`.

mod audit;
mod gemini;
mod places;
mod trends;

pub use audit::HttpWebsiteAuditor;
pub use gemini::{DEFAULT_MODEL, GeminiSummarizer};
pub use places::GooglePlacesClient;
pub use trends::TrendsApiClient;
