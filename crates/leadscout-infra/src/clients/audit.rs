//! Website SEO auditor - fetches a page over HTTPS and applies the audit
//! rubric.
//!
//! Each check scores 0-10; the header pair contributes 20, for a 70-point
//! maximum that the aggregate percentage is computed against.

use async_trait::async_trait;
use scraper::{Html, Selector};

use leadscout_core::domain::{
    AuditResult, AuditScore, ContentCheck, HeaderChecks, HeadingCheck, ImageCheck, LanguageCheck,
    MetaDescriptionCheck, TitleCheck,
};
use leadscout_core::error::{FetchError, FetchResult};
use leadscout_core::ports::WebsiteAuditor;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; LeadscoutAudit/0.1)";

/// Auditor that fetches `https://<host>/` and scores the landing page.
pub struct HttpWebsiteAuditor {
    http: reqwest::Client,
}

impl HttpWebsiteAuditor {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl WebsiteAuditor for HttpWebsiteAuditor {
    async fn audit(&self, host: &str) -> FetchResult<AuditResult> {
        tracing::debug!(host = %host, "auditing website");

        let response = self
            .http
            .get(format!("https://{host}/"))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| FetchError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamUnavailable(format!(
                "{host} answered HTTP {status}"
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        Ok(evaluate(host, &html))
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Run every check over the parsed page and tally the aggregate score.
fn evaluate(host: &str, html: &str) -> AuditResult {
    let doc = Html::parse_document(html);

    let title_tag = check_title(&doc);
    let meta_description = check_meta_description(&doc);
    let language = check_language(&doc);
    let headers = check_headers(&doc);
    let content_amount = check_content(&doc);
    let images = check_images(&doc);

    let score = AuditScore::tally(
        &title_tag,
        &meta_description,
        &language,
        &headers,
        &content_amount,
        &images,
    );

    AuditResult {
        url: host.to_string(),
        title_tag,
        meta_description,
        language,
        headers,
        content_amount,
        images,
        score,
    }
}

fn check_title(doc: &Html) -> TitleCheck {
    let title = doc
        .select(&selector("title"))
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string());

    let Some(title) = title else {
        return TitleCheck {
            status: "Title tag is missing - Add a title tag to improve SEO".to_string(),
            title: None,
            length: 0,
            score: 0.0,
        };
    };

    let length = title.chars().count();
    let (status, score) = if (50..=60).contains(&length) {
        (
            "Title length is optimal for search engines".to_string(),
            10.0,
        )
    } else if length < 50 {
        (
            format!("Title is too short ({length} chars) - Consider expanding to 50-60 characters"),
            7.0,
        )
    } else {
        (
            format!("Title is too long ({length} chars) - Consider shortening to 50-60 characters"),
            7.0,
        )
    };

    TitleCheck {
        status,
        title: Some(title),
        length,
        score,
    }
}

fn check_meta_description(doc: &Html) -> MetaDescriptionCheck {
    let description = doc
        .select(&selector(r#"meta[name="description"]"#))
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string());

    let Some(description) = description else {
        return MetaDescriptionCheck {
            status: "Meta description is missing - Add a description to improve search result snippets"
                .to_string(),
            description: None,
            length: 0,
            score: 0.0,
        };
    };

    let length = description.chars().count();
    let (status, score) = if (150..=160).contains(&length) {
        (
            "Meta description length is optimal for search engines".to_string(),
            10.0,
        )
    } else if length < 150 {
        (
            format!(
                "Meta description is too short ({length} chars) - Consider expanding to 150-160 characters"
            ),
            7.0,
        )
    } else {
        (
            format!(
                "Meta description is too long ({length} chars) - May be truncated in search results"
            ),
            6.0,
        )
    };

    MetaDescriptionCheck {
        status,
        description: Some(description),
        length,
        score,
    }
}

fn check_language(doc: &Html) -> LanguageCheck {
    let lang = doc
        .select(&selector("html"))
        .next()
        .and_then(|el| el.value().attr("lang"))
        .filter(|lang| !lang.is_empty())
        .map(str::to_string);

    match lang {
        Some(lang) => LanguageCheck {
            status: format!("Language attribute is properly set to \"{lang}\""),
            lang: Some(lang),
            score: 10.0,
        },
        None => LanguageCheck {
            status: "HTML lang attribute is missing - Add lang attribute to improve accessibility"
                .to_string(),
            lang: None,
            score: 5.0,
        },
    }
}

fn check_headers(doc: &Html) -> HeaderChecks {
    let h1_count = doc.select(&selector("h1")).count();
    let sub_count = doc.select(&selector("h2, h3, h4, h5, h6")).count();

    let h1 = match h1_count {
        0 => HeadingCheck {
            status: "No H1 tag found - Add one H1 tag for better content structure".to_string(),
            count: 0,
            score: 0.0,
        },
        1 => HeadingCheck {
            status: "Single H1 tag found - Perfect for content hierarchy".to_string(),
            count: 1,
            score: 10.0,
        },
        n => HeadingCheck {
            status: format!("Multiple H1 tags found ({n}) - Use only one H1 per page"),
            count: n,
            score: 5.0,
        },
    };

    let h2_h6 = if sub_count > 0 {
        HeadingCheck {
            status: format!("Good content structure with {sub_count} subheading(s) (H2-H6)"),
            count: sub_count,
            score: 10.0,
        }
    } else {
        HeadingCheck {
            status: "No subheadings (H2-H6) found - Consider adding subheadings for better structure"
                .to_string(),
            count: 0,
            score: 5.0,
        }
    };

    HeaderChecks { h1, h2_h6 }
}

fn check_content(doc: &Html) -> ContentCheck {
    let word_count = visible_word_count(doc);

    let (status, score) = if word_count >= 500 {
        (
            format!("Excellent content amount with {word_count} words - Great for SEO"),
            10.0,
        )
    } else if word_count >= 300 {
        (
            format!("Moderate content amount with {word_count} words - Consider adding more content"),
            7.0,
        )
    } else {
        (
            format!(
                "Low content amount with only {word_count} words - Add more content for better SEO"
            ),
            3.0,
        )
    };

    ContentCheck {
        status,
        word_count,
        score,
    }
}

/// Word count of the rendered text, skipping script and style contents.
fn visible_word_count(doc: &Html) -> usize {
    doc.tree
        .nodes()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let parent = node.parent()?;
            let element = parent.value().as_element()?;
            if matches!(element.name(), "script" | "style") {
                return None;
            }
            Some(text.split_whitespace().count())
        })
        .sum()
}

fn check_images(doc: &Html) -> ImageCheck {
    let images: Vec<_> = doc.select(&selector("img")).collect();
    let total_images = images.len();

    if total_images == 0 {
        return ImageCheck {
            status: "No images found on the page".to_string(),
            total_images: 0,
            missing_alt: 0,
            score: 10.0,
        };
    }

    let missing_alt = images
        .iter()
        .filter(|img| {
            img.value()
                .attr("alt")
                .map(|alt| alt.is_empty())
                .unwrap_or(true)
        })
        .count();

    if missing_alt == 0 {
        ImageCheck {
            status: format!("All {total_images} images have alt text - Excellent for accessibility"),
            total_images,
            missing_alt: 0,
            score: 10.0,
        }
    } else {
        ImageCheck {
            status: format!(
                "{missing_alt} of {total_images} images are missing alt text - Add alt text for better accessibility"
            ),
            total_images,
            missing_alt,
            score: 10.0 - (missing_alt as f64 / total_images as f64) * 10.0,
        }
    }
}
