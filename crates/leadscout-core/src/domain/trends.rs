use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Search-trend series for a business name.
///
/// `search_interest` is keyed by month (`YYYY-MM`) with the mean interest
/// for that month; `expansion_markets` maps region names to interest, with
/// zero-interest regions already filtered out. Ordered maps keep the
/// serialized form stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReport {
    pub search_interest: BTreeMap<String, f64>,
    pub expansion_markets: BTreeMap<String, f64>,
}
