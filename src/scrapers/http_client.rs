//! HTTP client for outbound scrape requests.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

/// Browser user agents rotated across scrape requests.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/122.0",
];

/// Pick a user agent pseudo-randomly.
pub fn random_user_agent() -> &'static str {
    use std::time::SystemTime;
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos() as usize)
        .unwrap_or(0);
    USER_AGENTS[nanos % USER_AGENTS.len()]
}

/// Errors from an outbound fetch. Scrapers absorb these into empty outcomes;
/// they never propagate past a scraper boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Network(String),
}

/// Thin wrapper over reqwest with per-request timeout and UA rotation.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// GET a page as text with a rotated user agent.
    /// Non-success statuses are errors.
    pub async fn get_html(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        self.get_html_with_headers(url, timeout, random_user_agent(), &[])
            .await
    }

    /// GET with a fixed user agent and extra request headers.
    pub async fn get_html_with_headers(
        &self,
        url: &str,
        timeout: Duration,
        user_agent: &str,
        headers: &[(&str, &str)],
    ) -> Result<String, FetchError> {
        let mut request = self
            .client
            .get(url)
            .timeout(timeout)
            .header(reqwest::header::USER_AGENT, user_agent);

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
