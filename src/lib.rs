//! skillscout - career and learning content aggregation service.
//!
//! Aggregates AI tool listings, job postings, and course listings from
//! third-party sites through layered scraping fallbacks, and uses Gemini
//! for summarization, topic extraction, and free-form chat.

pub mod cli;
pub mod config;
pub mod extract;
pub mod format;
pub mod llm;
pub mod models;
pub mod scrapers;
pub mod server;
