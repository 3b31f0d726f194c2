use async_trait::async_trait;

use crate::domain::{AiSummary, AuditResult, BusinessDetail, SearchPage, TrendReport};
use crate::error::FetchResult;

/// Text search against the maps service.
#[async_trait]
pub trait PlaceSearcher: Send + Sync {
    /// Look up businesses matching `query`, optionally continuing from a
    /// previous page token.
    async fn search(&self, query: &str, page_token: Option<&str>) -> FetchResult<SearchPage>;
}

/// Place-detail lookup against the maps service.
#[async_trait]
pub trait PlaceDirectory: Send + Sync {
    async fn details(&self, place_id: &str) -> FetchResult<BusinessDetail>;
}

/// SEO audit of a website, addressed by bare hostname.
#[async_trait]
pub trait WebsiteAuditor: Send + Sync {
    async fn audit(&self, host: &str) -> FetchResult<AuditResult>;
}

/// Interest-over-time and by-region search trends for a business name.
#[async_trait]
pub trait TrendsProvider: Send + Sync {
    async fn trends(&self, name: &str) -> FetchResult<TrendReport>;
}

/// Generative summary of a business profile.
#[async_trait]
pub trait AiSummarizer: Send + Sync {
    async fn summarize(&self, business: &BusinessDetail) -> FetchResult<AiSummary>;
}
