//! skillscout - career and learning content aggregation service.
//!
//! A backend for discovering AI tools, job postings, and courses from
//! public sites, with Gemini-assisted summarization and chat.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if skillscout::cli::is_verbose() {
        "skillscout=info"
    } else {
        "skillscout=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    skillscout::cli::run().await
}
