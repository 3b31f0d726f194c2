//! The cached business-lookup and scoring service.

mod cached;
mod score;

pub use cached::CachedFetch;
pub use score::{AI_WEIGHT, WEBSITE_WEIGHT, composite_score};

use std::sync::Arc;

use crate::cache_key::{CacheOp, INVALID_SITE, NO_SITE, audit_host};
use crate::domain::{AiSummary, AuditResult, BusinessDetail, SearchPage, TrendReport};
use crate::error::{FetchError, FetchResult};
use crate::ports::{
    AiSummarizer, Cache, PlaceDirectory, PlaceSearcher, TrendsProvider, WebsiteAuditor,
};

/// Composes the upstream fetchers behind the result cache.
///
/// Every public operation is memoized under its [`CacheOp`]; operations
/// that need the business profile (audit, summary, score) resolve it
/// through the same cache, so one cold profile fetch serves them all.
pub struct BusinessService {
    cached: CachedFetch,
    searcher: Arc<dyn PlaceSearcher>,
    directory: Arc<dyn PlaceDirectory>,
    auditor: Arc<dyn WebsiteAuditor>,
    trends: Arc<dyn TrendsProvider>,
    summarizer: Arc<dyn AiSummarizer>,
}

impl BusinessService {
    pub fn new(
        cache: Arc<dyn Cache>,
        searcher: Arc<dyn PlaceSearcher>,
        directory: Arc<dyn PlaceDirectory>,
        auditor: Arc<dyn WebsiteAuditor>,
        trends: Arc<dyn TrendsProvider>,
        summarizer: Arc<dyn AiSummarizer>,
    ) -> Self {
        Self {
            cached: CachedFetch::new(cache),
            searcher,
            directory,
            auditor,
            trends,
            summarizer,
        }
    }

    /// Text search, cached for two days per (query, page token) pair.
    pub async fn search_businesses(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> FetchResult<SearchPage> {
        self.cached
            .get_or_compute(CacheOp::Search { query, page_token }, || async move {
                self.searcher.search(query, page_token).await
            })
            .await
    }

    /// Full business profile, cached for a week per place id.
    pub async fn get_business_details(&self, place_id: &str) -> FetchResult<BusinessDetail> {
        self.cached
            .get_or_compute(CacheOp::Details { place_id }, || async move {
                self.directory.details(place_id).await
            })
            .await
    }

    /// SEO audit of the business website.
    ///
    /// Resolves the profile through the cache, derives the audit host from
    /// its website URL, and rejects businesses whose URL yields a host
    /// sentinel instead of auditing a garbage hostname.
    pub async fn get_website_stats(&self, place_id: &str) -> FetchResult<AuditResult> {
        self.cached
            .get_or_compute(CacheOp::WebsiteStats { place_id }, || async move {
                let business = self.get_business_details(place_id).await?;
                let website = business.website.as_deref().ok_or_else(|| {
                    FetchError::InvalidInput(format!("business {place_id} has no website"))
                })?;

                let host = audit_host(website);
                if host == NO_SITE || host == INVALID_SITE {
                    return Err(FetchError::InvalidInput(format!(
                        "website {website:?} has no auditable host"
                    )));
                }

                self.auditor.audit(&host).await
            })
            .await
    }

    /// Search-trend series for a business name, cached for a week.
    pub async fn get_search_trends(&self, name: &str) -> FetchResult<TrendReport> {
        self.cached
            .get_or_compute(CacheOp::Trends { name }, || async move {
                self.trends.trends(name).await
            })
            .await
    }

    /// Generative marketing summary of the cached business profile.
    pub async fn get_ai_summary(&self, place_id: &str) -> FetchResult<AiSummary> {
        self.cached
            .get_or_compute(CacheOp::Summary { place_id }, || async move {
                let business = self.get_business_details(place_id).await?;
                self.summarizer.summarize(&business).await
            })
            .await
    }

    /// Composite lead score: website audit percentage and AI overall score
    /// blended by fixed weights, one decimal place.
    ///
    /// Both sub-scores come through the cache and are fetched concurrently;
    /// if either fails, the aggregate fails with that error and nothing is
    /// stored under the score key.
    pub async fn get_score(&self, place_id: &str) -> FetchResult<f64> {
        self.cached
            .get_or_compute(CacheOp::Score { place_id }, || async move {
                let (audit, summary) = tokio::join!(
                    self.get_website_stats(place_id),
                    self.get_ai_summary(place_id),
                );
                let audit = audit?;
                let summary = summary?;

                Ok(composite_score(audit.score.percentage, summary.overall_score))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AuditScore, ContentCheck, HeaderChecks, HeadingCheck, ImageCheck, LanguageCheck,
        MetaDescriptionCheck, TitleCheck,
    };
    use crate::ports::CacheError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct MapCache {
        store: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl Cache for MapCache {
        async fn get(&self, key: &str) -> Option<String> {
            self.store.lock().await.get(key).cloned()
        }

        async fn set(
            &self,
            key: &str,
            value: &str,
            _ttl: Option<Duration>,
        ) -> Result<(), CacheError> {
            self.store
                .lock()
                .await
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), CacheError> {
            self.store.lock().await.remove(key);
            Ok(())
        }

        async fn exists(&self, key: &str) -> bool {
            self.store.lock().await.contains_key(key)
        }
    }

    fn detail(place_id: &str, website: Option<&str>) -> BusinessDetail {
        BusinessDetail {
            id: Some(place_id.to_string()),
            name: Some("Bean There".to_string()),
            status: Some("OPERATIONAL".to_string()),
            address: Some("1 Main St".to_string()),
            local_phone: None,
            international_phone: None,
            website: website.map(str::to_string),
            rating: Some(4.5),
            total_reviews: Some(210),
            summary: None,
            review_summary: None,
            reviews: vec![],
            photos: vec![],
        }
    }

    fn audit_result(percentage: f64) -> AuditResult {
        let heading = |score: f64| HeadingCheck {
            status: String::new(),
            count: 1,
            score,
        };
        AuditResult {
            url: "beanthere.example".to_string(),
            title_tag: TitleCheck {
                status: String::new(),
                title: None,
                length: 0,
                score: 10.0,
            },
            meta_description: MetaDescriptionCheck {
                status: String::new(),
                description: None,
                length: 0,
                score: 10.0,
            },
            language: LanguageCheck {
                status: String::new(),
                lang: None,
                score: 10.0,
            },
            headers: HeaderChecks {
                h1: heading(10.0),
                h2_h6: heading(10.0),
            },
            content_amount: ContentCheck {
                status: String::new(),
                word_count: 600,
                score: 10.0,
            },
            images: ImageCheck {
                status: String::new(),
                total_images: 0,
                missing_alt: 0,
                score: 10.0,
            },
            score: AuditScore {
                score: 70.0,
                max_score: 70.0,
                percentage,
            },
        }
    }

    fn summary(overall_score: f64) -> AiSummary {
        AiSummary {
            business_summary: "solid local roaster".to_string(),
            online_presence_review: "sparse".to_string(),
            online_presence_score: 55,
            red_flags: vec![],
            overall_score,
            fb_followers: vec![],
            ig_followers: vec![],
        }
    }

    #[derive(Default)]
    struct StubSearcher {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PlaceSearcher for StubSearcher {
        async fn search(&self, _query: &str, _page_token: Option<&str>) -> FetchResult<SearchPage> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(SearchPage {
                places: vec![],
                next_page_token: None,
            })
        }
    }

    struct StubDirectory {
        calls: AtomicUsize,
        website: Option<String>,
    }

    impl StubDirectory {
        fn with_website(website: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                website: Some(website.to_string()),
            }
        }
    }

    #[async_trait]
    impl PlaceDirectory for StubDirectory {
        async fn details(&self, place_id: &str) -> FetchResult<BusinessDetail> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(detail(place_id, self.website.as_deref()))
        }
    }

    struct StubAuditor {
        calls: AtomicUsize,
        result: FetchResult<AuditResult>,
    }

    #[async_trait]
    impl WebsiteAuditor for StubAuditor {
        async fn audit(&self, _host: &str) -> FetchResult<AuditResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct StubTrends;

    #[async_trait]
    impl TrendsProvider for StubTrends {
        async fn trends(&self, _name: &str) -> FetchResult<TrendReport> {
            Ok(TrendReport {
                search_interest: Default::default(),
                expansion_markets: Default::default(),
            })
        }
    }

    struct StubSummarizer {
        calls: AtomicUsize,
        result: FetchResult<AiSummary>,
    }

    #[async_trait]
    impl AiSummarizer for StubSummarizer {
        async fn summarize(&self, _business: &BusinessDetail) -> FetchResult<AiSummary> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    struct Fixture {
        service: BusinessService,
        directory: Arc<StubDirectory>,
        auditor: Arc<StubAuditor>,
        summarizer: Arc<StubSummarizer>,
    }

    fn fixture(
        audit: FetchResult<AuditResult>,
        ai: FetchResult<AiSummary>,
        website: &str,
    ) -> Fixture {
        let directory = Arc::new(StubDirectory::with_website(website));
        let auditor = Arc::new(StubAuditor {
            calls: AtomicUsize::new(0),
            result: audit,
        });
        let summarizer = Arc::new(StubSummarizer {
            calls: AtomicUsize::new(0),
            result: ai,
        });
        let service = BusinessService::new(
            Arc::new(MapCache::default()),
            Arc::new(StubSearcher::default()),
            directory.clone(),
            auditor.clone(),
            Arc::new(StubTrends),
            summarizer.clone(),
        );
        Fixture {
            service,
            directory,
            auditor,
            summarizer,
        }
    }

    #[tokio::test]
    async fn details_cold_then_warm_calls_adapter_once() {
        let fx = fixture(
            Ok(audit_result(80.0)),
            Ok(summary(70.0)),
            "https://beanthere.example",
        );

        let first = fx.service.get_business_details("place123").await.unwrap();
        let second = fx.service.get_business_details("place123").await.unwrap();

        assert_eq!(first.id.as_deref(), Some("place123"));
        assert_eq!(second.id.as_deref(), Some("place123"));
        assert_eq!(fx.directory.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn score_blends_cached_sub_scores() {
        let fx = fixture(
            Ok(audit_result(80.0)),
            Ok(summary(70.0)),
            "https://beanthere.example",
        );

        let score = fx.service.get_score("place123").await.unwrap();
        assert_eq!(score, 74.0);

        // The profile fetch is shared through the cache between the audit
        // and summary paths.
        assert_eq!(fx.directory.calls.load(Ordering::SeqCst), 1);
        assert_eq!(fx.auditor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(fx.summarizer.calls.load(Ordering::SeqCst), 1);

        // Warm score call touches no adapter at all.
        let again = fx.service.get_score("place123").await.unwrap();
        assert_eq!(again, 74.0);
        assert_eq!(fx.auditor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(fx.summarizer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn score_fails_when_audit_fails() {
        let fx = fixture(
            Err(FetchError::UpstreamUnavailable("crawler down".to_string())),
            Ok(summary(70.0)),
            "https://beanthere.example",
        );

        let err = fx.service.get_score("place123").await.unwrap_err();
        assert!(matches!(err, FetchError::UpstreamUnavailable(_)));

        // The failed aggregate was not cached: retrying hits the auditor
        // again.
        let _ = fx.service.get_score("place123").await;
        assert_eq!(fx.auditor.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn website_stats_rejects_unparseable_website() {
        let fx = fixture(Ok(audit_result(80.0)), Ok(summary(70.0)), "not a url");

        let err = fx.service.get_website_stats("place123").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidInput(_)));
        assert_eq!(fx.auditor.calls.load(Ordering::SeqCst), 0);
    }
}
