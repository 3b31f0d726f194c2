//! Google Places client - text search and place details.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use leadscout_core::domain::{BusinessDetail, Photo, PlaceSummary, Review, SearchPage};
use leadscout_core::error::{FetchError, FetchResult};
use leadscout_core::ports::{PlaceDirectory, PlaceSearcher};

const SEARCH_FIELD_MASK: &str = "places.displayName,\
places.formattedAddress,\
places.id,\
places.rating,\
places.userRatingCount,\
nextPageToken";

const DETAIL_FIELD_MASK: &str = "id,\
displayName,\
formattedAddress,\
rating,\
userRatingCount,\
websiteUri,\
nationalPhoneNumber,\
internationalPhoneNumber,\
reviewSummary,\
editorialSummary,\
businessStatus,\
photos,\
reviews";

const PAGE_SIZE: u32 = 10;

/// Client for the Places API v1, serving both the search and the
/// place-detail ports.
pub struct GooglePlacesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    pub fn new(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: "https://places.googleapis.com/v1".to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn check_status(status: StatusCode, what: &str) -> FetchResult<()> {
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::UpstreamUnavailable(format!(
                "{what}: HTTP {status}"
            )));
        }
        Ok(())
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    FetchError::UpstreamUnavailable(e.to_string())
}

#[async_trait]
impl PlaceSearcher for GooglePlacesClient {
    async fn search(&self, query: &str, page_token: Option<&str>) -> FetchResult<SearchPage> {
        tracing::debug!(query = %query, "searching places");

        let mut body = serde_json::json!({
            "textQuery": query.to_lowercase(),
            "pageSize": PAGE_SIZE,
        });
        if let Some(token) = page_token {
            body["pageToken"] = serde_json::Value::String(token.to_string());
        }

        let response = self
            .http
            .post(format!("{}/places:searchText", self.base_url))
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", SEARCH_FIELD_MASK)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        Self::check_status(response.status(), "place search")?;

        let raw: RawSearchResponse = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        Ok(raw.into())
    }
}

#[async_trait]
impl PlaceDirectory for GooglePlacesClient {
    async fn details(&self, place_id: &str) -> FetchResult<BusinessDetail> {
        tracing::debug!(place_id = %place_id, "fetching place details");

        let response = self
            .http
            .get(format!("{}/places/{place_id}", self.base_url))
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", DETAIL_FIELD_MASK)
            .send()
            .await
            .map_err(transport_error)?;

        Self::check_status(response.status(), place_id)?;

        let raw: RawPlaceDetail = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        Ok(raw.into())
    }
}

// Wire shapes, flattened into domain types below.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSearchResponse {
    #[serde(default)]
    places: Vec<RawPlace>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLocalizedText {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlace {
    id: String,
    display_name: Option<RawLocalizedText>,
    formatted_address: Option<String>,
    rating: Option<f64>,
    user_rating_count: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlaceDetail {
    id: Option<String>,
    display_name: Option<RawLocalizedText>,
    business_status: Option<String>,
    formatted_address: Option<String>,
    national_phone_number: Option<String>,
    international_phone_number: Option<String>,
    website_uri: Option<String>,
    rating: Option<f64>,
    user_rating_count: Option<u32>,
    editorial_summary: Option<RawLocalizedText>,
    review_summary: Option<RawReviewSummary>,
    #[serde(default)]
    reviews: Vec<RawReview>,
    #[serde(default)]
    photos: Vec<RawPhoto>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReviewSummary {
    text: Option<RawLocalizedText>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReview {
    author_attribution: Option<RawAuthor>,
    rating: Option<f64>,
    relative_publish_time_description: Option<String>,
    text: Option<RawLocalizedText>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAuthor {
    display_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPhoto {
    google_maps_uri: Option<String>,
    width_px: Option<u32>,
    height_px: Option<u32>,
}

impl From<RawSearchResponse> for SearchPage {
    fn from(raw: RawSearchResponse) -> Self {
        Self {
            places: raw.places.into_iter().map(Into::into).collect(),
            next_page_token: raw.next_page_token,
        }
    }
}

impl From<RawPlace> for PlaceSummary {
    fn from(raw: RawPlace) -> Self {
        Self {
            id: raw.id,
            name: raw.display_name.and_then(|n| n.text),
            address: raw.formatted_address,
            rating: raw.rating,
            user_rating_count: raw.user_rating_count,
        }
    }
}

impl From<RawPlaceDetail> for BusinessDetail {
    fn from(raw: RawPlaceDetail) -> Self {
        Self {
            id: raw.id,
            name: raw.display_name.and_then(|n| n.text),
            status: raw.business_status,
            address: raw.formatted_address,
            local_phone: raw.national_phone_number,
            international_phone: raw.international_phone_number,
            website: raw.website_uri,
            rating: raw.rating,
            total_reviews: raw.user_rating_count,
            summary: raw.editorial_summary.and_then(|s| s.text),
            review_summary: raw.review_summary.and_then(|s| s.text).and_then(|t| t.text),
            reviews: raw
                .reviews
                .into_iter()
                .map(|r| Review {
                    author: r.author_attribution.and_then(|a| a.display_name),
                    rating: r.rating,
                    time: r.relative_publish_time_description,
                    text: r.text.and_then(|t| t.text),
                })
                .collect(),
            photos: raw
                .photos
                .into_iter()
                .map(|p| Photo {
                    photo_uri: p.google_maps_uri,
                    width: p.width_px,
                    height: p.height_px,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_flattens_display_names() {
        let raw: RawSearchResponse = serde_json::from_value(serde_json::json!({
            "places": [{
                "id": "place123",
                "displayName": {"text": "Bean There", "languageCode": "en"},
                "formattedAddress": "1 Main St",
                "rating": 4.5,
                "userRatingCount": 210
            }],
            "nextPageToken": "tok-2"
        }))
        .unwrap();

        let page: SearchPage = raw.into();
        assert_eq!(page.places.len(), 1);
        assert_eq!(page.places[0].name.as_deref(), Some("Bean There"));
        assert_eq!(page.next_page_token.as_deref(), Some("tok-2"));
    }

    #[test]
    fn detail_response_flattens_nested_text() {
        let raw: RawPlaceDetail = serde_json::from_value(serde_json::json!({
            "id": "place123",
            "displayName": {"text": "Bean There"},
            "businessStatus": "OPERATIONAL",
            "websiteUri": "https://beanthere.example",
            "editorialSummary": {"text": "A cozy roaster"},
            "reviewSummary": {"text": {"text": "People love the espresso"}},
            "reviews": [{
                "authorAttribution": {"displayName": "Sam"},
                "rating": 5,
                "relativePublishTimeDescription": "a week ago",
                "text": {"text": "Great pour-over"}
            }],
            "photos": [{"googleMapsUri": "https://maps.example/p1", "widthPx": 800, "heightPx": 600}]
        }))
        .unwrap();

        let detail: BusinessDetail = raw.into();
        assert_eq!(detail.name.as_deref(), Some("Bean There"));
        assert_eq!(detail.summary.as_deref(), Some("A cozy roaster"));
        assert_eq!(
            detail.review_summary.as_deref(),
            Some("People love the espresso")
        );
        assert_eq!(detail.reviews[0].author.as_deref(), Some("Sam"));
        assert_eq!(detail.reviews[0].text.as_deref(), Some("Great pour-over"));
        assert_eq!(detail.photos[0].width, Some(800));
        assert!(detail.total_reviews.is_none());
    }

    #[test]
    fn missing_optional_fields_do_not_fail_decoding() {
        let raw: RawPlaceDetail = serde_json::from_value(serde_json::json!({
            "id": "place123"
        }))
        .unwrap();

        let detail: BusinessDetail = raw.into();
        assert_eq!(detail.id.as_deref(), Some("place123"));
        assert!(detail.website.is_none());
        assert!(detail.reviews.is_empty());
    }
}
