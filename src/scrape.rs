//! # Article Scraper
//!
//! Fetches a page and reduces it to analyzable text plus provenance.
//! Extraction is regex-heuristic, not a DOM walk: drop noise blocks
//! (script/style/nav/footer/aside), then take the first matching
//! content container (article, role=main, known content classes, main),
//! falling back to joined paragraphs. Metadata comes from the title
//! tag, meta tags, JSON-LD, and the URL host.
//!
//! [`ArticleFetcher`] is the seam the API depends on, so tests can
//! serve canned articles without a network.

use std::time::{Duration, Instant};

use anyhow::Context;
use async_trait::async_trait;
use metrics::{counter, histogram};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::result::SourceMetadata;

pub const USER_AGENT: &str =
    concat!("credibility-guard/", env!("CARGO_PKG_VERSION"), " (content analysis bot)");
const CONNECT_TIMEOUT: Duration = Duration::from_secs(4);
const TOTAL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ScrapedArticle {
    pub content: String,
    pub metadata: SourceMetadata,
}

#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    async fn scrape_article(&self, url: &str) -> anyhow::Result<ScrapedArticle>;
}

pub struct ArticleScraper {
    client: reqwest::Client,
}

impl ArticleScraper {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(TOTAL_TIMEOUT)
            .build()
            .expect("reqwest client");
        Self { client }
    }
}

impl Default for ArticleScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleFetcher for ArticleScraper {
    async fn scrape_article(&self, url: &str) -> anyhow::Result<ScrapedArticle> {
        counter!("scrape_requests_total").increment(1);
        let started = Instant::now();

        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                counter!("scrape_failures_total").increment(1);
                warn!(error = ?e, "article fetch failed");
                return Err(e).context(format!("failed to load {url}"));
            }
        };
        if !response.status().is_success() {
            counter!("scrape_failures_total").increment(1);
            anyhow::bail!("failed to load {url}: status {}", response.status());
        }
        let html = response.text().await.context("read response body")?;

        let content = extract_content(&html);
        let metadata = extract_metadata(&html, url);
        histogram!("scrape_fetch_ms").record(started.elapsed().as_millis() as f64);
        debug!(chars = content.chars().count(), url, "article extracted");

        Ok(ScrapedArticle { content, metadata })
    }
}

static NOISE_BLOCKS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["script", "style", "nav", "footer", "aside"]
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>")).expect("noise regex")
        })
        .collect()
});

// Checked in order; the first container with text wins.
static CONTENT_CONTAINERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?is)<article\b[^>]*>(.*?)</article\s*>",
        r#"(?is)<div\b[^>]*\brole\s*=\s*["']main["'][^>]*>(.*?)</div\s*>"#,
        r#"(?is)<div\b[^>]*\bclass\s*=\s*["'][^"']*(?:article-content|post-content|entry-content|content)[^"']*["'][^>]*>(.*?)</div\s*>"#,
        r"(?is)<main\b[^>]*>(.*?)</main\s*>",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("container regex"))
    .collect()
});

static PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").expect("paragraph regex"));
static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title\s*>").expect("title regex"));
static META_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("meta regex"));
static META_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(name|property|content)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("meta attr regex")
});
static JSON_LD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<script\b[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script\s*>"#)
        .expect("json-ld regex")
});
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Reduce a page to its main text.
pub fn extract_content(html: &str) -> String {
    let mut cleaned = html.to_string();
    for re in NOISE_BLOCKS.iter() {
        cleaned = re.replace_all(&cleaned, " ").into_owned();
    }

    for re in CONTENT_CONTAINERS.iter() {
        let chunks: Vec<String> = re
            .captures_iter(&cleaned)
            .map(|cap| strip_tags(&cap[1]))
            .filter(|text| !text.is_empty())
            .collect();
        if !chunks.is_empty() {
            return chunks.join(" ");
        }
    }

    let paragraphs: Vec<String> = PARAGRAPH
        .captures_iter(&cleaned)
        .map(|cap| strip_tags(&cap[1]))
        .filter(|text| !text.is_empty())
        .collect();
    paragraphs.join(" ")
}

/// Title, author, publication date and host. Meta tags win over JSON-LD;
/// JSON-LD only fills fields still empty.
pub fn extract_metadata(html: &str, url: &str) -> SourceMetadata {
    let mut meta = SourceMetadata::default();

    if let Some(cap) = TITLE.captures(html) {
        meta.title = strip_tags(&cap[1]);
    }

    for tag in META_TAG.find_iter(html) {
        let (name, property, content) = meta_attrs(tag.as_str());
        let Some(content) = content else { continue };
        if meta.author.is_empty()
            && (name == "author" || name == "article:author" || property == "article:author")
        {
            meta.author = content.clone();
        }
        if meta.publication_date.is_empty()
            && (name == "publish-date"
                || name == "article:published_time"
                || property == "article:published_time"
                || property == "article:published")
        {
            meta.publication_date = content.clone();
        }
    }

    for cap in JSON_LD.captures_iter(html) {
        let Ok(value) = serde_json::from_str::<Value>(cap[1].trim()) else {
            continue;
        };
        if meta.author.is_empty() {
            if let Some(name) = value
                .get("author")
                .and_then(|a| a.get("name"))
                .and_then(Value::as_str)
            {
                meta.author = name.to_string();
            }
        }
        if meta.publication_date.is_empty() {
            if let Some(date) = value.get("datePublished").and_then(Value::as_str) {
                meta.publication_date = date.to_string();
            }
        }
    }

    meta.domain = url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default();
    meta
}

/// Lowercased (name, property, content) attributes of one meta tag.
fn meta_attrs(tag: &str) -> (String, String, Option<String>) {
    let mut name = String::new();
    let mut property = String::new();
    let mut content = None;
    for cap in META_ATTR.captures_iter(tag) {
        let value = cap
            .get(2)
            .or_else(|| cap.get(3))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        match cap[1].to_ascii_lowercase().as_str() {
            "name" => name = value.to_ascii_lowercase(),
            "property" => property = value.to_ascii_lowercase(),
            "content" => content = Some(value),
            _ => {}
        }
    }
    (name, property, content)
}

fn strip_tags(fragment: &str) -> String {
    let without_tags = TAG.replace_all(fragment, " ");
    let decoded = html_escape::decode_html_entities(without_tags.as_ref());
    WHITESPACE.replace_all(decoded.as_ref(), " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_PAGE: &str = r#"<html><head>
<title>Reading study  update</title>
<meta name="author" content="L. Park">
<meta property="article:published_time" content="2025-05-20T10:00:00Z">
</head><body>
<nav>Home | About</nav>
<script>var tracker = 1;</script>
<style>p { color: red }</style>
<article><p>First paragraph of the piece.</p><p>Second &amp; final paragraph.</p></article>
<footer>Contact us</footer>
</body></html>"#;

    #[test]
    fn article_tag_wins_and_noise_is_dropped() {
        let content = extract_content(ARTICLE_PAGE);
        assert_eq!(content, "First paragraph of the piece. Second & final paragraph.");
    }

    #[test]
    fn metadata_comes_from_title_meta_and_url() {
        let meta = extract_metadata(ARTICLE_PAGE, "https://news.example.com/story");
        assert_eq!(meta.title, "Reading study update");
        assert_eq!(meta.author, "L. Park");
        assert_eq!(meta.publication_date, "2025-05-20T10:00:00Z");
        assert_eq!(meta.domain, "news.example.com");
    }

    #[test]
    fn json_ld_fills_missing_fields_only() {
        let html = r#"<html><head>
<meta name="author" content="Meta Author">
<script type="application/ld+json">{"author": {"name": "Ld Author"}, "datePublished": "2024-02-01"}</script>
</head><body><p>text here</p></body></html>"#;
        let meta = extract_metadata(html, "https://a.example/x");
        assert_eq!(meta.author, "Meta Author");
        assert_eq!(meta.publication_date, "2024-02-01");
    }

    #[test]
    fn role_main_div_is_used_when_no_article() {
        let html = r#"<body><div role="main">Lead text <b>bolded</b> here.</div><p>sidebar</p></body>"#;
        assert_eq!(extract_content(html), "Lead text bolded here.");
    }

    #[test]
    fn known_content_classes_are_recognized() {
        let html = r#"<body><div class="site post-content wide">Story body text.</div></body>"#;
        assert_eq!(extract_content(html), "Story body text.");
    }

    #[test]
    fn falls_back_to_joined_paragraphs() {
        let html = "<body><h1>Head</h1><p>One.</p><div><p>Two.</p></div></body>";
        assert_eq!(extract_content(html), "One. Two.");
    }

    #[test]
    fn empty_page_extracts_to_empty_string() {
        assert_eq!(extract_content("<html><body></body></html>"), "");
    }

    #[test]
    fn entities_and_whitespace_are_normalized() {
        let html = "<article>Fish &amp; chips\n\n  cost &pound;5</article>";
        assert_eq!(extract_content(html), "Fish & chips cost £5");
    }

    #[test]
    fn single_quoted_meta_attributes_parse() {
        let html = "<head><meta name='publish-date' content='2024-12-01'></head>";
        let meta = extract_metadata(html, "not a url");
        assert_eq!(meta.publication_date, "2024-12-01");
        assert_eq!(meta.domain, "");
    }
}
