use serde::{Deserialize, Serialize};

/// Condensed listing entry returned by a text search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    pub id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub user_rating_count: Option<u32>,
}

/// One page of search results plus the token for fetching the next page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub places: Vec<PlaceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// A customer review attached to a business profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author: Option<String>,
    pub rating: Option<f64>,
    pub time: Option<String>,
    pub text: Option<String>,
}

/// A photo attribution attached to a business profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub photo_uri: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Full business profile assembled from the place-detail lookup.
///
/// Upstream fields are all optional; a profile missing a field carries
/// `None` rather than failing the lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetail {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub address: Option<String>,
    pub local_phone: Option<String>,
    pub international_phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub total_reviews: Option<u32>,
    pub summary: Option<String>,
    pub review_summary: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl BusinessDetail {
    /// Profile view sent to the AI summarizer: bulky collections and
    /// derived counts are stripped before prompting.
    pub fn summary_profile(&self) -> serde_json::Value {
        let mut profile = serde_json::to_value(self).unwrap_or_default();
        if let Some(map) = profile.as_object_mut() {
            map.remove("photos");
            map.remove("reviews");
            map.remove("totalReviews");
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BusinessDetail {
        BusinessDetail {
            id: Some("place123".to_string()),
            name: Some("Bean There".to_string()),
            status: Some("OPERATIONAL".to_string()),
            address: Some("1 Main St".to_string()),
            local_phone: None,
            international_phone: None,
            website: Some("https://beanthere.example".to_string()),
            rating: Some(4.5),
            total_reviews: Some(210),
            summary: None,
            review_summary: None,
            reviews: vec![Review {
                author: Some("A".to_string()),
                rating: Some(5.0),
                time: Some("a week ago".to_string()),
                text: Some("great".to_string()),
            }],
            photos: vec![],
        }
    }

    #[test]
    fn summary_profile_strips_bulky_fields() {
        let profile = sample().summary_profile();
        let map = profile.as_object().unwrap();
        assert!(!map.contains_key("photos"));
        assert!(!map.contains_key("reviews"));
        assert!(!map.contains_key("totalReviews"));
        assert_eq!(map["name"], "Bean There");
    }
}
