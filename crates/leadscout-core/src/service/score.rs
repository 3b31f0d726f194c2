//! Composite lead-score weighting.

/// Contribution of the website audit percentage.
pub const WEBSITE_WEIGHT: f64 = 0.4;

/// Contribution of the AI overall score.
pub const AI_WEIGHT: f64 = 0.6;

/// Blend the two sub-scores into one number, rounded to one decimal.
///
/// A true weighted average: each term is multiplied by its own weight and
/// the weights sum to 1.0.
pub fn composite_score(website_score: f64, ai_score: f64) -> f64 {
    let blended = website_score * WEBSITE_WEIGHT + ai_score * AI_WEIGHT;
    (blended * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_is_weighted_average() {
        assert_eq!(composite_score(80.0, 70.0), 74.0);
    }

    #[test]
    fn composite_rounds_to_one_decimal() {
        assert_eq!(composite_score(81.3, 72.9), 76.3);
    }

    #[test]
    fn weights_sum_to_one() {
        assert_eq!(WEBSITE_WEIGHT + AI_WEIGHT, 1.0);
    }
}
