use serde::{Deserialize, Serialize};

/// Structured marketing summary produced by the generative model.
///
/// `overall_score` is whatever the model emits on its 0-100 instruction;
/// the range is not enforced here. Red flags and follower entries are
/// (label, value) pairs as requested in the prompt schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSummary {
    pub business_summary: String,
    pub online_presence_review: String,
    pub online_presence_score: i64,
    pub red_flags: Vec<(String, String)>,
    pub overall_score: f64,
    pub fb_followers: Vec<(String, String)>,
    pub ig_followers: Vec<(String, String)>,
}
