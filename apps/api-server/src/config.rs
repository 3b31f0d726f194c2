//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use leadscout_infra::clients::DEFAULT_MODEL;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// API key for the Places service.
    pub google_api_key: String,
    /// API key for the Gemini summarizer.
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Base URL of the search-trends API.
    pub trends_api_url: String,
    /// Timeout applied to every upstream HTTP request.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The upstream credentials are required; everything else has a
    /// sensible default.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            google_api_key: Self::required("GOOGLE_API_KEY")?,
            gemini_api_key: Self::required("GEMINI_API_KEY")?,
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            trends_api_url: Self::required("TRENDS_API_URL")?,
            request_timeout: Duration::from_secs(
                env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        })
    }

    fn required(name: &str) -> Result<String, String> {
        env::var(name).map_err(|_| format!("{name} is missing from the environment"))
    }
}
