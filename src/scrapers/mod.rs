//! Scrapers for third-party content sources.
//!
//! Each category (tools, jobs, courses) is a cascade of strategies tried in
//! priority order: a strategy that fails or matches nothing yields an empty
//! outcome and the cascade advances. Failures never escape a scraper
//! boundary; they are carried as [`EmptyReason`] values so the cascade's
//! decisions stay observable.

mod http_client;
mod select;

pub mod courses;
pub mod fallback;
pub mod jobs;
pub mod tools;

pub use courses::CourseScraper;
pub use http_client::{random_user_agent, FetchError, HttpClient, USER_AGENTS};
pub use jobs::JobScraper;
pub use tools::ToolScraper;

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Why a scrape strategy produced no records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /// Network-level failure (DNS, connect, timeout).
    Network(String),
    /// Upstream returned a non-success status.
    HttpStatus(u16),
    /// The page fetched and parsed, but no cards matched.
    NoMatches,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::Network(msg) => write!(f, "network error: {}", msg),
            EmptyReason::HttpStatus(code) => write!(f, "HTTP {}", code),
            EmptyReason::NoMatches => write!(f, "no matches"),
        }
    }
}

impl From<FetchError> for EmptyReason {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Status(code) => EmptyReason::HttpStatus(code),
            FetchError::Network(msg) => EmptyReason::Network(msg),
        }
    }
}

/// Result of one scrape strategy.
#[derive(Debug, Clone)]
pub struct ScrapeOutcome<T> {
    /// Records in discovery order, already deduplicated and capped.
    pub records: Vec<T>,
    /// Set when `records` is empty; explains which way the strategy failed.
    pub empty_reason: Option<EmptyReason>,
}

impl<T> ScrapeOutcome<T> {
    /// A successful scrape. An empty record list is marked `NoMatches`.
    pub fn found(records: Vec<T>) -> Self {
        let empty_reason = records.is_empty().then_some(EmptyReason::NoMatches);
        Self {
            records,
            empty_reason,
        }
    }

    /// A failed scrape, carrying the reason.
    pub fn empty(reason: EmptyReason) -> Self {
        Self {
            records: Vec::new(),
            empty_reason: Some(reason),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Keep the first record for each distinct key, preserving order.
pub fn dedup_by_key<T, K, F>(records: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(key(record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_empty_is_no_matches() {
        let outcome: ScrapeOutcome<String> = ScrapeOutcome::found(Vec::new());
        assert!(outcome.is_empty());
        assert_eq!(outcome.empty_reason, Some(EmptyReason::NoMatches));
    }

    #[test]
    fn test_found_non_empty_has_no_reason() {
        let outcome = ScrapeOutcome::found(vec!["a".to_string()]);
        assert!(!outcome.is_empty());
        assert_eq!(outcome.empty_reason, None);
    }

    #[test]
    fn test_dedup_by_key_keeps_first() {
        let records = vec![("a", 1), ("b", 2), ("a", 3)];
        let deduped = dedup_by_key(records, |r| r.0);
        assert_eq!(deduped, vec![("a", 1), ("b", 2)]);
    }
}
