use serde::{Deserialize, Serialize};

/// Title tag check - optimal length is 50-60 characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleCheck {
    pub status: String,
    pub title: Option<String>,
    pub length: usize,
    pub score: f64,
}

/// Meta description check - optimal length is 150-160 characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaDescriptionCheck {
    pub status: String,
    pub description: Option<String>,
    pub length: usize,
    pub score: f64,
}

/// `<html lang>` attribute check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageCheck {
    pub status: String,
    pub lang: Option<String>,
    pub score: f64,
}

/// Count-based heading check, used for both H1 and H2-H6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingCheck {
    pub status: String,
    pub count: usize,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderChecks {
    pub h1: HeadingCheck,
    pub h2_h6: HeadingCheck,
}

/// Visible word-count check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCheck {
    pub status: String,
    pub word_count: usize,
    pub score: f64,
}

/// Image alt-text coverage check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageCheck {
    pub status: String,
    pub total_images: usize,
    pub missing_alt: usize,
    pub score: f64,
}

/// Aggregate of all check scores. `percentage` is what the score
/// aggregator consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditScore {
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
}

/// Structured SEO audit of a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    pub url: String,
    pub title_tag: TitleCheck,
    pub meta_description: MetaDescriptionCheck,
    pub language: LanguageCheck,
    pub headers: HeaderChecks,
    pub content_amount: ContentCheck,
    pub images: ImageCheck,
    pub score: AuditScore,
}

impl AuditScore {
    /// Sum the individual check scores against their maximums.
    /// Five single checks are worth 10 each, the header pair 20.
    pub fn tally(
        title: &TitleCheck,
        meta: &MetaDescriptionCheck,
        language: &LanguageCheck,
        headers: &HeaderChecks,
        content: &ContentCheck,
        images: &ImageCheck,
    ) -> Self {
        let total = title.score
            + meta.score
            + language.score
            + content.score
            + images.score
            + headers.h1.score
            + headers.h2_h6.score;
        let max_score = 70.0;
        let percentage = total / max_score * 100.0;

        Self {
            score: (total * 10.0).round() / 10.0,
            max_score,
            percentage: (percentage * 10.0).round() / 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(score: f64) -> HeadingCheck {
        HeadingCheck {
            status: String::new(),
            count: 1,
            score,
        }
    }

    #[test]
    fn tally_computes_percentage_over_seventy_points() {
        let score = AuditScore::tally(
            &TitleCheck {
                status: String::new(),
                title: None,
                length: 0,
                score: 10.0,
            },
            &MetaDescriptionCheck {
                status: String::new(),
                description: None,
                length: 0,
                score: 7.0,
            },
            &LanguageCheck {
                status: String::new(),
                lang: None,
                score: 10.0,
            },
            &HeaderChecks {
                h1: check(10.0),
                h2_h6: check(10.0),
            },
            &ContentCheck {
                status: String::new(),
                word_count: 0,
                score: 7.0,
            },
            &ImageCheck {
                status: String::new(),
                total_images: 0,
                missing_alt: 0,
                score: 10.0,
            },
        );

        assert_eq!(score.score, 64.0);
        assert_eq!(score.max_score, 70.0);
        assert_eq!(score.percentage, 91.4);
    }
}
