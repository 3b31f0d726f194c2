//! Search-trends client.
//!
//! Talks to a trends API exposing interest-over-time and
//! interest-by-region series, and normalizes them into the shape the rest
//! of the system consumes: monthly means over the last twelve months and a
//! region map with zero-interest regions dropped.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use leadscout_core::domain::TrendReport;
use leadscout_core::error::{FetchError, FetchResult};
use leadscout_core::ports::TrendsProvider;

const TIMEFRAME: &str = "today 12-m";

pub struct TrendsApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl TrendsApiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> FetchResult<T> {
        let response = self
            .http
            .get(format!("{}/{path}", self.base_url))
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamUnavailable(format!(
                "trends {path}: HTTP {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl TrendsProvider for TrendsApiClient {
    async fn trends(&self, name: &str) -> FetchResult<TrendReport> {
        tracing::debug!(name = %name, "fetching search trends");

        let over_time: RawInterestOverTime = self
            .fetch_json("interest-over-time", &[("q", name), ("timeframe", TIMEFRAME)])
            .await?;
        let by_region: RawInterestByRegion =
            self.fetch_json("interest-by-region", &[("q", name)]).await?;

        Ok(TrendReport {
            search_interest: monthly_means(&over_time.points)?,
            expansion_markets: expansion_markets(by_region.regions),
        })
    }
}

#[derive(Deserialize)]
struct RawInterestOverTime {
    #[serde(default)]
    points: Vec<RawPoint>,
}

#[derive(Deserialize)]
struct RawPoint {
    date: String,
    value: f64,
}

#[derive(Deserialize)]
struct RawInterestByRegion {
    #[serde(default)]
    regions: Vec<RawRegion>,
}

#[derive(Deserialize)]
struct RawRegion {
    name: String,
    value: f64,
}

/// Bucket daily/weekly points into `YYYY-MM` keys and average each bucket.
fn monthly_means(points: &[RawPoint]) -> FetchResult<BTreeMap<String, f64>> {
    let mut sums: BTreeMap<String, (f64, u32)> = BTreeMap::new();

    for point in points {
        let date = NaiveDate::parse_from_str(&point.date, "%Y-%m-%d").map_err(|_| {
            FetchError::MalformedResponse(format!("bad trend date {:?}", point.date))
        })?;
        let bucket = date.format("%Y-%m").to_string();
        let entry = sums.entry(bucket).or_insert((0.0, 0));
        entry.0 += point.value;
        entry.1 += 1;
    }

    Ok(sums
        .into_iter()
        .map(|(month, (sum, count))| (month, sum / count as f64))
        .collect())
}

/// Keep only regions with positive interest.
fn expansion_markets(regions: Vec<RawRegion>) -> BTreeMap<String, f64> {
    regions
        .into_iter()
        .filter(|region| region.value > 0.0)
        .map(|region| (region.name, region.value))
        .collect()
}
