//! Web server exposing the scraping cascades and Gemini endpoints.
//!
//! All state is request-scoped: handlers hold shared clients and scrapers
//! behind `Arc`s, run their outbound calls sequentially, and keep nothing
//! between requests.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::extract::TextExtractor;
use crate::llm::{GeminiClient, TopicExtractor};
use crate::scrapers::{CourseScraper, JobScraper, ToolScraper};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
    pub topics: Arc<TopicExtractor>,
    pub tools: Arc<ToolScraper>,
    pub jobs: Arc<JobScraper>,
    pub courses: Arc<CourseScraper>,
    pub extractor: Arc<TextExtractor>,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let gemini = Arc::new(GeminiClient::new(settings.gemini.clone()));
        Self {
            topics: Arc::new(TopicExtractor::new(gemini.clone())),
            gemini,
            tools: Arc::new(ToolScraper::new()),
            jobs: Arc::new(JobScraper::new()),
            courses: Arc::new(CourseScraper::new()),
            extractor: Arc::new(TextExtractor::new()),
            upload_dir: settings.upload_dir.clone(),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    std::fs::create_dir_all(&state.upload_dir)?;

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
