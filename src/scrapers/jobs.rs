//! Job discovery from a single live source.
//!
//! Jobs deliberately have no secondary source or mock tier: mixing boards
//! produces inconsistent listings, so an empty result is allowed to stand.

use std::collections::HashSet;
use std::time::Duration;

use scraper::Html;
use tracing::{info, warn};

use super::http_client::HttpClient;
use super::select::{first_href, first_text, select_cards};
use super::ScrapeOutcome;
use crate::models::JobRecord;

const JOBS_BASE: &str = "https://www.linkedin.com";
const JOBS_TIMEOUT: Duration = Duration::from_secs(15);

// The jobs site rejects obvious bots; present a fixed desktop profile.
const JOBS_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const JOBS_HEADERS: &[(&str, &str)] = &[
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.5"),
    ("Connection", "keep-alive"),
    ("Upgrade-Insecure-Requests", "1"),
];

const CARD_SELECTORS: &[&str] = &["div.base-card", "li.job-search-card", "div.job-search-card"];
const TITLE_SELECTORS: &[&str] = &[
    "h3.base-search-card__title",
    "h3.job-search-card__title",
    "a.job-search-card__title",
];
const COMPANY_SELECTORS: &[&str] = &[
    "h4.base-search-card__subtitle",
    "h4.job-search-card__subtitle",
    "a.job-search-card__subtitle",
];
const LOCATION_SELECTORS: &[&str] = &[
    "span.job-search-card__location",
    "div.job-search-card__location",
    "span.base-search-card__metadata",
];
const LINK_SELECTORS: &[&str] = &[
    "a.base-card__full-link",
    "a.job-search-card__title",
    "a",
];
const DESCRIPTION_SELECTORS: &[&str] = &[
    "p.job-search-card__snippet",
    "div.job-search-card__snippet",
    "p.base-search-card__snippet",
];

/// Scraper for job postings.
pub struct JobScraper {
    client: HttpClient,
    base: String,
}

impl Default for JobScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl JobScraper {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(),
            base: JOBS_BASE.to_string(),
        }
    }

    /// Override the upstream base URL (tests point this at a local server).
    pub fn with_base(mut self, base: &str) -> Self {
        self.base = base.to_string();
        self
    }

    /// Single-source fetch. An empty sequence is a valid answer.
    pub async fn fetch(&self, query: &str, location: &str, limit: usize) -> Vec<JobRecord> {
        let outcome = self.scrape_listings(query, location, limit).await;
        match &outcome.empty_reason {
            Some(reason) => warn!("Job scrape empty for '{}': {}", query, reason),
            None => info!(
                "Found {} jobs for '{}' in '{}'",
                outcome.records.len(),
                query,
                location
            ),
        }
        outcome.records
    }

    pub async fn scrape_listings(
        &self,
        query: &str,
        location: &str,
        limit: usize,
    ) -> ScrapeOutcome<JobRecord> {
        let url = format!(
            "{}/jobs/search/?keywords={}&location={}",
            self.base,
            urlencoding::encode(query),
            urlencoding::encode(location)
        );

        let html = match self
            .client
            .get_html_with_headers(&url, JOBS_TIMEOUT, JOBS_USER_AGENT, JOBS_HEADERS)
            .await
        {
            Ok(html) => html,
            Err(e) => return ScrapeOutcome::empty(e.into()),
        };

        ScrapeOutcome::found(parse_listings(&html, location, limit))
    }
}

fn parse_listings(html: &str, fallback_location: &str, limit: usize) -> Vec<JobRecord> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut jobs = Vec::new();

    for card in select_cards(&document, CARD_SELECTORS) {
        if jobs.len() >= limit {
            break;
        }

        // Title and company are required; skip the card when either is
        // missing or empty after trimming.
        let Some(title) = first_text(card, TITLE_SELECTORS) else {
            continue;
        };
        let Some(company) = first_text(card, COMPANY_SELECTORS) else {
            continue;
        };
        if !seen.insert(title.clone()) {
            continue;
        }

        let location = first_text(card, LOCATION_SELECTORS)
            .unwrap_or_else(|| fallback_location.to_string());
        let description = first_text(card, DESCRIPTION_SELECTORS).unwrap_or_else(|| {
            format!("Exciting opportunity for {} at {}", title, company)
        });
        let link = first_href(card, LINK_SELECTORS).unwrap_or_else(|| "#".to_string());

        jobs.push(JobRecord {
            title,
            company,
            location,
            description,
            link,
        });
    }

    jobs
}
