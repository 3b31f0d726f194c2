//! Cache-key derivation.
//!
//! Each cacheable operation is an explicit [`CacheOp`] variant carrying its
//! natural arguments; the variant owns both the normalization rule that
//! produces the key and the operation's fixed TTL. Derivation never fails:
//! malformed inputs degrade to sentinel values.

use std::time::Duration;

use sha2::{Digest, Sha256};
use url::Url;

/// Host sentinel for a URL that parses but carries no host.
pub const NO_SITE: &str = "no-site";

/// Host sentinel for a URL that does not parse at all.
pub const INVALID_SITE: &str = "invalid-site";

const TWO_DAYS: Duration = Duration::from_secs(2 * 24 * 60 * 60);
const SEVEN_DAYS: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// A cacheable operation and its call arguments.
///
/// Calls that fall outside this set are not cacheable and run through
/// [`CachedFetch::passthrough`](crate::service::CachedFetch::passthrough)
/// instead of deriving a key here.
#[derive(Debug, Clone, Copy)]
pub enum CacheOp<'a> {
    Search {
        query: &'a str,
        page_token: Option<&'a str>,
    },
    Details {
        place_id: &'a str,
    },
    WebsiteStats {
        place_id: &'a str,
    },
    Trends {
        name: &'a str,
    },
    Summary {
        place_id: &'a str,
    },
    Score {
        place_id: &'a str,
    },
}

impl CacheOp<'_> {
    /// Derive the cache key for this operation.
    ///
    /// Search queries are case-folded and digested together with the page
    /// token, so equivalent requests land on one entry. The remaining
    /// operations use their identifier verbatim (names have spaces replaced
    /// with `_`), which is already short and well-formed.
    pub fn key(&self) -> String {
        match self {
            CacheOp::Search { query, page_token } => {
                // serde_json maps are ordered by key, so the serialized
                // form is stable for hashing.
                let normalized = serde_json::json!({
                    "q": query.to_lowercase(),
                    "token": page_token.unwrap_or(""),
                });
                let mut hasher = Sha256::new();
                hasher.update(normalized.to_string());
                format!("cache:search:{:x}", hasher.finalize())
            }
            CacheOp::Details { place_id } => format!("cache:details:{place_id}"),
            CacheOp::WebsiteStats { place_id } => format!("cache:website-stats:{place_id}"),
            CacheOp::Trends { name } => format!("cache:trends:{}", name.replace(' ', "_")),
            CacheOp::Summary { place_id } => format!("cache:summary:{place_id}"),
            CacheOp::Score { place_id } => format!("cache:score:{place_id}"),
        }
    }

    /// Fixed retention per operation. Listing data churns faster than
    /// profile data, so search entries expire sooner; audit, trends, and
    /// AI calls are costly and keep their results a full week.
    pub fn ttl(&self) -> Duration {
        match self {
            CacheOp::Search { .. } => TWO_DAYS,
            _ => SEVEN_DAYS,
        }
    }
}

/// Extract the audit target host from a business website URL.
///
/// Never fails: a URL without a host maps to [`NO_SITE`], an unparseable
/// one to [`INVALID_SITE`]. Callers treat both sentinels as "nothing to
/// audit" rather than propagating a derivation error.
pub fn audit_host(website: &str) -> String {
    match Url::parse(website) {
        Ok(url) => url
            .host_str()
            .map(|host| host.to_lowercase())
            .unwrap_or_else(|| NO_SITE.to_string()),
        Err(_) => INVALID_SITE.to_string(),
    }
}
