//! Source-reliability dimension.
//!
//! Starts from a neutral 0.5 and stacks bonuses: trusted domain (or the
//! .edu/.gov/.org ladder), named author, recent publication date, and
//! embedded-link density. Capped at 1.0; nothing below 0.5.
//!
//! The trusted-domain check is a substring match against the lowercased
//! host, so the bare "edu" entry in the seed list already covers .edu
//! hosts and the `ends_with(".edu")` rung below it never fires with the
//! default list. The rung stays: operators do trim the trusted list.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::heuristics::Heuristics;
use crate::result::SourceMetadata;

const BASE_SCORE: f32 = 0.5;
const TRUSTED_BONUS: f32 = 0.3;
const INSTITUTIONAL_BONUS: f32 = 0.25;
const NONPROFIT_BONUS: f32 = 0.1;
const AUTHOR_BONUS: f32 = 0.1;
const FRESHNESS_BONUS: f32 = 0.1;
const LINKS_BONUS: f32 = 0.1;
const FRESH_WITHIN_DAYS: i64 = 365;
const LINKS_FOR_BONUS: usize = 3;

pub fn score(
    text: &str,
    url: Option<&str>,
    metadata: Option<&SourceMetadata>,
    heuristics: &Heuristics,
    now: DateTime<Utc>,
) -> f32 {
    let mut score = BASE_SCORE;

    if let Some(domain) = url.and_then(host_of) {
        if heuristics
            .trusted_domains
            .iter()
            .any(|t| domain.contains(t.as_str()))
        {
            score += TRUSTED_BONUS;
        } else if domain.ends_with(".edu") || domain.ends_with(".gov") {
            score += INSTITUTIONAL_BONUS;
        } else if domain.ends_with(".org") {
            score += NONPROFIT_BONUS;
        }
    }

    if let Some(meta) = metadata {
        if !meta.author.trim().is_empty() {
            score += AUTHOR_BONUS;
        }
        if !meta.publication_date.is_empty() {
            if let Some(published) = parse_publication_date(&meta.publication_date) {
                if (now - published).num_days() < FRESH_WITHIN_DAYS {
                    score += FRESHNESS_BONUS;
                }
            }
        }
    }

    if heuristics.absolute_url.find_iter(text).count() > LINKS_FOR_BONUS {
        score += LINKS_BONUS;
    }

    score.min(1.0)
}

fn host_of(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
}

/// Accepts RFC 3339 (with offset or `Z`), a bare `%Y-%m-%dT%H:%M:%S`,
/// or a plain date; anything else is ignored.
fn parse_publication_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn run(text: &str, url: Option<&str>, metadata: Option<&SourceMetadata>) -> f32 {
        score(text, url, metadata, &Heuristics::seed(), fixed_now())
    }

    #[test]
    fn bare_text_is_neutral() {
        assert!((run("plain words", None, None) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn trusted_domain_earns_full_bonus() {
        let s = run("x", Some("https://bbc.com/news/article-123"), None);
        assert!((s - 0.8).abs() < 1e-6);
    }

    #[test]
    fn edu_host_hits_trusted_substring_not_institutional_rung() {
        // "edu" sits in the trusted list, so .edu hosts take the 0.3 path.
        let s = run("x", Some("https://physics.example.edu/paper"), None);
        assert!((s - 0.8).abs() < 1e-6);
    }

    #[test]
    fn gov_host_takes_institutional_rung() {
        let s = run("x", Some("https://records.texas.gov/file"), None);
        assert!((s - 0.75).abs() < 1e-6);
    }

    #[test]
    fn org_host_takes_nonprofit_rung() {
        let s = run("x", Some("https://example.org/post"), None);
        assert!((s - 0.6).abs() < 1e-6);
    }

    #[test]
    fn unparseable_url_earns_nothing() {
        let s = run("x", Some("not a url at all"), None);
        assert!((s - 0.5).abs() < 1e-6);
    }

    #[test]
    fn author_and_fresh_date_stack() {
        let meta = SourceMetadata {
            author: "R. Alvarez".into(),
            publication_date: "2025-05-20T10:00:00Z".into(),
            ..Default::default()
        };
        let s = run("x", None, Some(&meta));
        assert!((s - 0.7).abs() < 1e-6);
    }

    #[test]
    fn stale_date_earns_no_freshness() {
        let meta = SourceMetadata {
            publication_date: "2020-01-01".into(),
            ..Default::default()
        };
        let s = run("x", None, Some(&meta));
        assert!((s - 0.5).abs() < 1e-6);
    }

    #[test]
    fn garbage_date_is_ignored() {
        let meta = SourceMetadata {
            publication_date: "last Tuesday".into(),
            ..Default::default()
        };
        let s = run("x", None, Some(&meta));
        assert!((s - 0.5).abs() < 1e-6);
    }

    #[test]
    fn plain_date_within_a_year_counts_as_fresh() {
        let meta = SourceMetadata {
            publication_date: "2025-03-01".into(),
            ..Default::default()
        };
        let s = run("x", None, Some(&meta));
        assert!((s - 0.6).abs() < 1e-6);
    }

    #[test]
    fn four_links_earn_the_density_bonus_three_do_not() {
        let three = "see https://a.example/1 https://b.example/2 https://c.example/3";
        let four = "see https://a.example/1 https://b.example/2 https://c.example/3 https://d.example/4";
        assert!((run(three, None, None) - 0.5).abs() < 1e-6);
        assert!((run(four, None, None) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn uppercase_scheme_links_do_not_count() {
        let shouted = "HTTPS://A.EXAMPLE/1 HTTPS://B.EXAMPLE/2 HTTPS://C.EXAMPLE/3 HTTPS://D.EXAMPLE/4";
        assert!((run(shouted, None, None) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn everything_together_caps_at_one() {
        let meta = SourceMetadata {
            author: "A. Writer".into(),
            publication_date: "2025-05-01".into(),
            ..Default::default()
        };
        let text = "refs https://a.example/1 https://b.example/2 https://c.example/3 https://d.example/4";
        let s = run(text, Some("https://nature.com/articles/x"), Some(&meta));
        assert!((s - 1.0).abs() < 1e-6);
    }
}
