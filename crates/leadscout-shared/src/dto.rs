//! Data Transfer Objects - response envelopes for the API.

use serde::{Deserialize, Serialize};

use leadscout_core::domain::{PlaceSummary, SearchPage};

/// Envelope for the business search listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSearchResponse {
    pub businesses: Vec<PlaceSummary>,
    pub count: usize,
    pub next_page_token: Option<String>,
    pub has_more: bool,
}

impl From<SearchPage> for BusinessSearchResponse {
    fn from(page: SearchPage) -> Self {
        let has_more = page.next_page_token.is_some();
        Self {
            count: page.places.len(),
            businesses: page.places,
            next_page_token: page.next_page_token,
            has_more,
        }
    }
}

/// Envelope for the composite lead score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub place_id: String,
    pub score: f64,
}
