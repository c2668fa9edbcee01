//! AI tool discovery: directory scrape, search-engine fallback, mock set.

use std::collections::HashSet;
use std::time::Duration;

use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

use super::fallback;
use super::http_client::HttpClient;
use super::select::{element_text, first_href, first_text, select_cards};
use super::{EmptyReason, ScrapeOutcome};
use crate::models::ToolRecord;

const DIRECTORY_BASE: &str = "https://www.aixploria.com";
const SEARCH_BASE: &str = "https://duckduckgo.com";

const DIRECTORY_TIMEOUT: Duration = Duration::from_secs(20);
const SEARCH_TIMEOUT: Duration = Duration::from_secs(15);

// Directory listing. Each post-info block marks one card; field extraction
// runs over the block's enclosing container, since the title and visit
// button sit next to the block rather than inside it.
const CARD_MARKER: &str = "div.post-info";
const TITLE_SELECTORS: &[&str] = &[".dark-title"];
const LINK_SELECTORS: &[&str] = &["a.visit-site-button4"];
const DESCRIPTION_SELECTORS: &[&str] = &["p.post-excerpt"];

// Search-engine result links.
const RESULT_SELECTORS: &[&str] = &["a.result__a"];

/// Scraper for AI tool listings.
pub struct ToolScraper {
    client: HttpClient,
    directory_base: String,
    search_base: String,
}

impl Default for ToolScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolScraper {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(),
            directory_base: DIRECTORY_BASE.to_string(),
            search_base: SEARCH_BASE.to_string(),
        }
    }

    /// Override upstream base URLs (tests point these at a local server).
    pub fn with_bases(mut self, directory: &str, search: &str) -> Self {
        self.directory_base = directory.to_string();
        self.search_base = search.to_string();
        self
    }

    /// Full cascade: directory -> search engine -> static mock set.
    /// Always returns a sequence; never raises.
    pub async fn fetch(&self, query: &str, limit: usize) -> Vec<ToolRecord> {
        let primary = self.scrape_directory(query, limit).await;
        if !primary.is_empty() {
            info!(
                "Found {} tools on directory for '{}'",
                primary.records.len(),
                query
            );
            return primary.records;
        }
        warn!(
            "Directory scrape empty ({}), trying search fallback",
            primary.empty_reason.unwrap_or(EmptyReason::NoMatches)
        );

        let secondary = self.scrape_search(query, limit).await;
        if !secondary.is_empty() {
            info!("Search fallback: {} tools found", secondary.records.len());
            return secondary.records;
        }
        warn!(
            "Search fallback empty ({}), using mock tools",
            secondary.empty_reason.unwrap_or(EmptyReason::NoMatches)
        );

        fallback::mock_tools(limit)
    }

    /// Primary strategy: the directory's own search page.
    pub async fn scrape_directory(&self, query: &str, limit: usize) -> ScrapeOutcome<ToolRecord> {
        let url = format!(
            "{}/en/?s={}",
            self.directory_base,
            query.replace(' ', "+")
        );

        let html = match self.client.get_html(&url, DIRECTORY_TIMEOUT).await {
            Ok(html) => html,
            Err(e) => return ScrapeOutcome::empty(e.into()),
        };

        ScrapeOutcome::found(parse_directory(&html, limit))
    }

    /// Secondary strategy: a search-engine HTML endpoint scoped to the
    /// directory's domain.
    pub async fn scrape_search(&self, query: &str, limit: usize) -> ScrapeOutcome<ToolRecord> {
        let url = format!(
            "{}/html/?q=site:aixploria.com+{}",
            self.search_base,
            urlencoding::encode(query)
        );

        let html = match self.client.get_html(&url, SEARCH_TIMEOUT).await {
            Ok(html) => html,
            Err(e) => return ScrapeOutcome::empty(e.into()),
        };

        ScrapeOutcome::found(parse_search_results(&html, limit))
    }
}

fn parse_directory(html: &str, limit: usize) -> Vec<ToolRecord> {
    let document = Html::parse_document(html);
    let marker = match Selector::parse(CARD_MARKER) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let mut seen = HashSet::new();
    let mut tools = Vec::new();

    for info in document.select(&marker) {
        if tools.len() >= limit {
            break;
        }
        let card = info.parent().and_then(ElementRef::wrap).unwrap_or(info);

        let Some(title) = first_text(card, TITLE_SELECTORS) else {
            continue;
        };
        let Some(url) = first_href(card, LINK_SELECTORS) else {
            continue;
        };
        if !seen.insert(title.clone()) {
            continue;
        }

        let description = first_text(card, DESCRIPTION_SELECTORS)
            .unwrap_or_else(|| format!("AI tool: {}", title));

        tools.push(ToolRecord {
            title,
            url,
            description,
        });
    }

    tools
}

fn parse_search_results(html: &str, limit: usize) -> Vec<ToolRecord> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut tools = Vec::new();

    for result in select_cards(&document, RESULT_SELECTORS) {
        if tools.len() >= limit {
            break;
        }

        let title = element_text(result);
        if title.is_empty() {
            continue;
        }
        let Some(url) = result.value().attr("href").map(str::to_string) else {
            continue;
        };
        if !seen.insert(title.clone()) {
            continue;
        }

        let description = format!("AI tool from Aixploria: {}", title);
        tools.push(ToolRecord {
            title,
            url,
            description,
        });
    }

    tools
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTORY_HTML: &str = r#"
        <html><body>
          <div class="tool-card">
            <div class="post-info"><span>Featured</span></div>
            <h3 class="dark-title">WriterBot</h3>
            <a class="visit-site-button4" href="https://writerbot.example">Visit</a>
            <p class="post-excerpt">Drafts articles for you.</p>
          </div>
          <div class="tool-card">
            <div class="post-info"><span>New</span></div>
            <h3 class="dark-title">PixelForge</h3>
            <a class="visit-site-button4" href="https://pixelforge.example">Visit</a>
          </div>
          <div class="tool-card">
            <div class="post-info"></div>
            <h3 class="dark-title">WriterBot</h3>
            <a class="visit-site-button4" href="https://dupe.example">Visit</a>
          </div>
          <div class="tool-card">
            <div class="post-info"></div>
            <h3 class="dark-title">NoLink</h3>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_parse_directory_extracts_and_dedups() {
        let tools = parse_directory(DIRECTORY_HTML, 10);
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].title, "WriterBot");
        assert_eq!(tools[0].url, "https://writerbot.example");
        assert_eq!(tools[0].description, "Drafts articles for you.");
        // Missing description degrades to a literal.
        assert_eq!(tools[1].description, "AI tool: PixelForge");
    }

    #[test]
    fn test_parse_directory_respects_limit() {
        let tools = parse_directory(DIRECTORY_HTML, 1);
        assert_eq!(tools.len(), 1);
        assert!(parse_directory(DIRECTORY_HTML, 0).is_empty());
    }

    #[test]
    fn test_parse_search_results() {
        let html = r#"
            <html><body>
              <a class="result__a" href="https://www.aixploria.com/tool-one">Tool One</a>
              <a class="result__a" href="https://www.aixploria.com/tool-two">Tool Two</a>
            </body></html>
        "#;
        let tools = parse_search_results(html, 10);
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[1].description, "AI tool from Aixploria: Tool Two");
    }

    #[tokio::test]
    async fn test_cascade_falls_back_to_mock_set() {
        let mut server = mockito::Server::new_async().await;
        // Both live tiers return markup with no matching cards.
        let _directory = server
            .mock("GET", "/en/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html><body>nothing here</body></html>")
            .create_async()
            .await;
        let _search = server
            .mock("GET", "/html/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html><body>still nothing</body></html>")
            .create_async()
            .await;

        let scraper = ToolScraper::new().with_bases(&server.url(), &server.url());
        let tools = scraper.fetch("AI tools", 5).await;
        assert_eq!(tools.len(), 5);
        assert_eq!(tools[0].title, "ChatGPT");
    }

    #[tokio::test]
    async fn test_cascade_prefers_live_directory() {
        let mut server = mockito::Server::new_async().await;
        let _directory = server
            .mock("GET", "/en/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(DIRECTORY_HTML)
            .create_async()
            .await;

        let scraper = ToolScraper::new().with_bases(&server.url(), &server.url());
        let tools = scraper.fetch("writing", 5).await;
        assert_eq!(tools[0].title, "WriterBot");
        // Live data only: the mock set never mixes in.
        assert!(tools.iter().all(|t| t.title != "ChatGPT"));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_reports_reason() {
        let scraper = ToolScraper::new().with_bases("http://127.0.0.1:1", "http://127.0.0.1:1");
        let outcome = scraper.scrape_directory("AI tools", 5).await;
        assert!(outcome.is_empty());
        assert!(matches!(
            outcome.empty_reason,
            Some(EmptyReason::Network(_))
        ));
    }
}
