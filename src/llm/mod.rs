//! Gemini-backed text generation.
//!
//! Wraps the generateContent REST endpoint for direct responses, chunked
//! summarization of oversized input, and keyword-style topic extraction.
//! A missing API credential is a valid configuration state: every dependent
//! call degrades to a fixed user-visible message instead of failing.

mod chunk;
mod client;
mod config;
mod prompts;
mod topics;

pub use chunk::split_chunks;
pub use client::{GeminiClient, GeminiError, CHUNK_THRESHOLD_CHARS, MAX_CHUNK_CHARS};
pub use config::GeminiConfig;
pub use topics::{TopicExtractor, DOCUMENT_TOPIC_FALLBACK};

pub(crate) use topics::truncate_chars;

/// Fixed message returned by every model-dependent path when no credential
/// is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Gemini API key not configured. Please set GEMINI_API_KEY in environment variables.";
