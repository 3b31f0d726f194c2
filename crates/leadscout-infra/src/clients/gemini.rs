//! Gemini summarizer client.
//!
//! Calls `models/{model}:generateContent` with a JSON response schema so
//! the model's answer decodes directly into the summary shape.

use async_trait::async_trait;
use serde::Deserialize;

use leadscout_core::domain::{AiSummary, BusinessDetail};
use leadscout_core::error::{FetchError, FetchResult};
use leadscout_core::ports::AiSummarizer;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub struct GeminiSummarizer {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiSummarizer {
    pub fn new(http: reqwest::Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl AiSummarizer for GeminiSummarizer {
    async fn summarize(&self, business: &BusinessDetail) -> FetchResult<AiSummary> {
        tracing::debug!(business = ?business.name, "generating AI summary");

        let body = serde_json::json!({
            "contents": [{"parts": [{"text": build_prompt(business)}]}],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            },
        });

        let response = self
            .http
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| FetchError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamUnavailable(format!(
                "gemini: HTTP {status}"
            )));
        }

        let raw: RawGenerateResponse = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        let text = raw
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| {
                FetchError::MalformedResponse("gemini response has no candidate text".to_string())
            })?;

        parse_summary(&text)
    }
}

fn build_prompt(business: &BusinessDetail) -> String {
    let profile = business.summary_profile();
    format!(
        "You are a top-tier, award winning digital marketing agent. With the following information \
         and additional information you find online about the business provided, provide the following \
         information in the perspective of a helpful assistant: \
         A brief overview of the business in your perspective, a review on the business's online \
         presence (such as social media, internet, etc) and accessibility online, and potential red \
         flags related to their business growth, marketing, SEO, etc. Each red flag should be a tuple \
         (title, explanation), where the title is a short phrase, and the explanation provides a \
         specific marketing, SEO, or growth-related concern. \
         Also, based on everything you gathered, give an overall score out of 100 based on their need \
         for SEO solutions. And find the business related facebook or instagram account details, in \
         tuple format (handle, follower count). If none found for a platform, leave its list empty. \
         The business in particular is: {profile}"
    )
}

/// Gemini structured-output schema matching [`AiSummary`] field for field
/// (the follower lists keep the service's own naming).
fn response_schema() -> serde_json::Value {
    let string_pairs = serde_json::json!({
        "type": "ARRAY",
        "items": {"type": "ARRAY", "items": {"type": "STRING"}},
    });

    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "business_summary": {"type": "STRING"},
            "online_presence_review": {"type": "STRING"},
            "online_presence_score": {"type": "INTEGER"},
            "red_flags": string_pairs,
            "overall_score": {"type": "NUMBER"},
            "facebook_followers": string_pairs,
            "instagram_followers": string_pairs,
        },
        "required": [
            "business_summary",
            "online_presence_review",
            "online_presence_score",
            "red_flags",
            "overall_score",
            "facebook_followers",
            "instagram_followers"
        ],
    })
}

#[derive(Deserialize)]
struct RawGenerateResponse {
    #[serde(default)]
    candidates: Vec<RawCandidate>,
}

#[derive(Deserialize)]
struct RawCandidate {
    content: Option<RawContent>,
}

#[derive(Deserialize)]
struct RawContent {
    #[serde(default)]
    parts: Vec<RawPart>,
}

#[derive(Deserialize)]
struct RawPart {
    text: Option<String>,
}

/// The model's JSON keys; follower lists are renamed on the way out.
#[derive(Deserialize)]
struct RawSummary {
    business_summary: String,
    online_presence_review: String,
    online_presence_score: i64,
    red_flags: Vec<(String, String)>,
    overall_score: f64,
    facebook_followers: Vec<(String, String)>,
    instagram_followers: Vec<(String, String)>,
}

fn parse_summary(text: &str) -> FetchResult<AiSummary> {
    let raw: RawSummary = serde_json::from_str(text)
        .map_err(|e| FetchError::MalformedResponse(format!("gemini summary: {e}")))?;

    Ok(AiSummary {
        business_summary: raw.business_summary,
        online_presence_review: raw.online_presence_review,
        online_presence_score: raw.online_presence_score,
        red_flags: raw.red_flags,
        overall_score: raw.overall_score,
        fb_followers: raw.facebook_followers,
        ig_followers: raw.instagram_followers,
    })
}
