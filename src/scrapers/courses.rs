//! Course discovery from two live providers, merged, with a platform-link
//! fallback.
//!
//! Unlike the other cascades, the two live strategies here are not
//! alternatives: both run (sequentially), their outputs are concatenated in
//! provider order, deduplicated by title, and capped. First provider wins
//! ties, and when it alone fills the limit the cap drops the second
//! provider's results entirely.

use std::collections::HashSet;
use std::time::Duration;

use scraper::{Html, Selector};
use tracing::{info, warn};

use super::fallback;
use super::http_client::HttpClient;
use super::select::{first_href, first_text, resolve_url, select_cards};
use super::{dedup_by_key, ScrapeOutcome};
use crate::models::CourseRecord;

const COURSERA_BASE: &str = "https://www.coursera.org";
const UDEMY_BASE: &str = "https://www.udemy.com";

const COURSERA_TIMEOUT: Duration = Duration::from_secs(15);
const UDEMY_TIMEOUT: Duration = Duration::from_secs(10);

const COURSERA_CARD_SELECTORS: &[&str] = &[r#"li[data-testid="search-result"]"#];
const COURSERA_TITLE_SELECTORS: &[&str] = &[r#"[data-testid="search-result-title"]"#];
const COURSERA_PROVIDER_SELECTORS: &[&str] = &[r#"[data-testid="partner-name"]"#];
const COURSERA_LINK_SELECTORS: &[&str] = &["a"];

/// Scraper for course listings.
pub struct CourseScraper {
    client: HttpClient,
    coursera_base: String,
    udemy_base: String,
}

impl Default for CourseScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseScraper {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(),
            coursera_base: COURSERA_BASE.to_string(),
            udemy_base: UDEMY_BASE.to_string(),
        }
    }

    /// Override upstream base URLs (tests point these at a local server).
    pub fn with_bases(mut self, coursera: &str, udemy: &str) -> Self {
        self.coursera_base = coursera.to_string();
        self.udemy_base = udemy.to_string();
        self
    }

    /// Merge-then-cap cascade: both live providers, deduplicated by title,
    /// else per-platform search links.
    pub async fn fetch(&self, query: &str, limit: usize) -> Vec<CourseRecord> {
        let coursera = self.scrape_coursera(query, limit).await;
        if let Some(reason) = &coursera.empty_reason {
            warn!("Coursera scrape empty: {}", reason);
        }

        let udemy = self.scrape_udemy(query, limit).await;
        if let Some(reason) = &udemy.empty_reason {
            warn!("Udemy scrape empty: {}", reason);
        }

        let mut merged = coursera.records;
        merged.extend(udemy.records);
        let mut merged = dedup_by_key(merged, |c: &CourseRecord| c.title.clone());

        if !merged.is_empty() {
            merged.truncate(limit);
            info!("Found {} live courses for '{}'", merged.len(), query);
            return merged;
        }

        info!("No live courses for '{}', returning platform links", query);
        fallback::platform_links(query, limit)
    }

    pub async fn scrape_coursera(&self, query: &str, limit: usize) -> ScrapeOutcome<CourseRecord> {
        let url = format!(
            "{}/search?query={}",
            self.coursera_base,
            urlencoding::encode(query)
        );

        let html = match self.client.get_html(&url, COURSERA_TIMEOUT).await {
            Ok(html) => html,
            Err(e) => return ScrapeOutcome::empty(e.into()),
        };

        ScrapeOutcome::found(parse_coursera(&html, &self.coursera_base, limit))
    }

    /// Udemy embeds structured course data as JSON-LD rather than scrapable
    /// markup, so records are mined out of the script blocks.
    pub async fn scrape_udemy(&self, query: &str, limit: usize) -> ScrapeOutcome<CourseRecord> {
        let url = format!(
            "{}/courses/search/?q={}",
            self.udemy_base,
            urlencoding::encode(query)
        );

        let html = match self.client.get_html(&url, UDEMY_TIMEOUT).await {
            Ok(html) => html,
            Err(e) => return ScrapeOutcome::empty(e.into()),
        };

        ScrapeOutcome::found(parse_udemy_json_ld(&html, &self.udemy_base, limit))
    }
}

fn parse_coursera(html: &str, base_url: &str, limit: usize) -> Vec<CourseRecord> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut courses = Vec::new();

    for card in select_cards(&document, COURSERA_CARD_SELECTORS) {
        if courses.len() >= limit {
            break;
        }

        let Some(title) = first_text(card, COURSERA_TITLE_SELECTORS) else {
            continue;
        };
        let Some(href) = first_href(card, COURSERA_LINK_SELECTORS) else {
            continue;
        };
        if !seen.insert(title.clone()) {
            continue;
        }

        let provider = first_text(card, COURSERA_PROVIDER_SELECTORS)
            .unwrap_or_else(|| "Coursera".to_string());

        courses.push(CourseRecord {
            title,
            provider,
            platform: "Coursera".to_string(),
            url: resolve_url(base_url, &href),
            logo: None,
        });
    }

    courses
}

fn parse_udemy_json_ld(html: &str, base_url: &str, limit: usize) -> Vec<CourseRecord> {
    let document = Html::parse_document(html);
    let selector = match Selector::parse(r#"script[type="application/ld+json"]"#) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let mut seen = HashSet::new();
    let mut courses = Vec::new();

    for script in document.select(&selector) {
        if courses.len() >= limit {
            break;
        }

        let raw: String = script.text().collect();
        // Malformed JSON-LD blocks are skipped silently.
        let Ok(data) = serde_json::from_str::<serde_json::Value>(&raw) else {
            continue;
        };
        if data.get("@type").and_then(|t| t.as_str()) != Some("Course") {
            continue;
        }

        let title = data
            .get("name")
            .and_then(|n| n.as_str())
            .unwrap_or("Untitled")
            .to_string();
        if !seen.insert(title.clone()) {
            continue;
        }

        let provider = data
            .get("provider")
            .and_then(|p| p.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("Udemy")
            .to_string();
        let url = data
            .get("url")
            .and_then(|u| u.as_str())
            .unwrap_or(base_url)
            .to_string();

        courses.push(CourseRecord {
            title,
            provider,
            platform: "Udemy".to_string(),
            url,
            logo: None,
        });
    }

    courses
}
