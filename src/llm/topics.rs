//! Topic extraction: compress verbose queries and documents into short
//! keyword phrases before they reach a scraper.

use std::sync::Arc;

use tracing::{debug, warn};

use super::client::GeminiClient;
use super::prompts::{document_topics_prompt, query_topics_prompt};
use crate::models::Category;

/// Placeholder returned when topics cannot be extracted from a document.
pub const DOCUMENT_TOPIC_FALLBACK: &str = "document analysis";

/// Characters of document text submitted for extraction.
const DOCUMENT_SAMPLE_CHARS: usize = 2000;

/// Model-backed keyword extraction with graceful degradation.
pub struct TopicExtractor {
    gemini: Arc<GeminiClient>,
}

impl TopicExtractor {
    pub fn new(gemini: Arc<GeminiClient>) -> Self {
        Self { gemini }
    }

    /// Extract 2-3 keywords from a search query.
    ///
    /// On any failure (no credential, call error, empty parse) the original
    /// query is returned unchanged.
    pub async fn from_query(&self, query: &str, category: Category) -> String {
        if !self.gemini.is_configured() {
            return query.to_string();
        }

        let prompt = query_topics_prompt(query, category);
        match self.gemini.generate(&prompt).await {
            Ok(response) => match parse_keywords(&response) {
                Some(keywords) => {
                    debug!("Extracted topics for {}: '{}'", category.as_str(), keywords);
                    keywords
                }
                None => query.to_string(),
            },
            Err(e) => {
                warn!("Topic extraction failed: {}", e);
                query.to_string()
            }
        }
    }

    /// Extract 2-3 keywords from document text.
    ///
    /// The text is truncated to a fixed sample before submission. On any
    /// failure a fixed placeholder is returned instead of the document.
    pub async fn from_document(&self, text: &str, category: Category) -> String {
        if !self.gemini.is_configured() {
            return DOCUMENT_TOPIC_FALLBACK.to_string();
        }

        let sample = truncate_chars(text, DOCUMENT_SAMPLE_CHARS);
        let prompt = document_topics_prompt(sample, category);
        match self.gemini.generate(&prompt).await {
            Ok(response) => parse_keywords(&response)
                .unwrap_or_else(|| DOCUMENT_TOPIC_FALLBACK.to_string()),
            Err(e) => {
                warn!("Topic extraction from document failed: {}", e);
                DOCUMENT_TOPIC_FALLBACK.to_string()
            }
        }
    }
}

/// Parse a comma-separated model response into a space-joined keyword
/// phrase: at most the first three non-empty trimmed segments.
fn parse_keywords(response: &str) -> Option<String> {
    let keywords: Vec<&str> = response
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(3)
        .collect();

    if keywords.is_empty() {
        None
    } else {
        Some(keywords.join(" "))
    }
}

/// Truncate to a character count on a valid boundary.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(
            parse_keywords("python, django , ").as_deref(),
            Some("python django")
        );
        assert_eq!(
            parse_keywords("rust, tokio, axum, serde").as_deref(),
            Some("rust tokio axum")
        );
        assert_eq!(
            parse_keywords("machine learning").as_deref(),
            Some("machine learning")
        );
        assert_eq!(parse_keywords(""), None);
        assert_eq!(parse_keywords(" , ,, "), None);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
