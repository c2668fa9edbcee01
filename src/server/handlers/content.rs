//! Content listing endpoints backed by the scraping cascades.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use super::super::AppState;
use crate::format;
use crate::models::Category;

/// Queries longer than this are compressed by topic extraction first.
const BIG_QUERY_CHARS: usize = 50;

/// Parameters for the tools and courses listings.
#[derive(Debug, Deserialize)]
pub struct ContentParams {
    pub query: Option<String>,
    pub limit: Option<i64>,
    pub format: Option<String>,
}

/// Parameters for the jobs listing.
#[derive(Debug, Deserialize)]
pub struct JobsParams {
    pub query: Option<String>,
    pub location: Option<String>,
    pub limit: Option<i64>,
    pub format: Option<String>,
}

/// Clamp a caller-supplied limit; zero or negative collects nothing.
fn clamp_limit(limit: Option<i64>, default: usize) -> usize {
    match limit {
        None => default,
        Some(n) if n <= 0 => 0,
        Some(n) => n as usize,
    }
}

fn wants_markdown(format: &Option<String>) -> bool {
    format.as_deref() == Some("markdown")
}

/// Compress oversized queries into a keyword phrase before scraping.
async fn effective_query(state: &AppState, query: String, category: Category) -> String {
    if query.chars().count() > BIG_QUERY_CHARS {
        let extracted = state.topics.from_query(&query, category).await;
        info!(
            "Big query detected. Original: '{}' -> Extracted: '{}'",
            query, extracted
        );
        extracted
    } else {
        query
    }
}

/// GET /api/ai-tools
pub async fn get_ai_tools(
    State(state): State<AppState>,
    Query(params): Query<ContentParams>,
) -> Response {
    let query = params.query.unwrap_or_else(|| "AI tools".to_string());
    let limit = clamp_limit(params.limit, 10);

    let query = effective_query(&state, query, Category::AiTools).await;
    let tools = state.tools.fetch(&query, limit).await;

    if wants_markdown(&params.format) {
        let markdown = format::tools_to_markdown(&tools);
        return Json(serde_json::json!({"markdown": markdown, "data": tools})).into_response();
    }

    Json(tools).into_response()
}

/// GET /api/jobs
pub async fn get_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsParams>,
) -> Response {
    let query = params.query.unwrap_or_else(|| "Software Engineer".to_string());
    let location = params.location.unwrap_or_else(|| "gujarat".to_string());
    let limit = clamp_limit(params.limit, 10);

    let query = effective_query(&state, query, Category::Jobs).await;
    let jobs = state.jobs.fetch(&query, &location, limit).await;
    let result = serde_json::json!({ "jobs": jobs });

    if wants_markdown(&params.format) {
        let markdown = format::jobs_to_markdown(&jobs);
        return Json(serde_json::json!({"markdown": markdown, "data": result})).into_response();
    }

    Json(result).into_response()
}

/// GET /api/courses
pub async fn get_courses(
    State(state): State<AppState>,
    Query(params): Query<ContentParams>,
) -> Response {
    let query = params.query.unwrap_or_else(|| "AI".to_string());
    let limit = clamp_limit(params.limit, 5);

    let query = effective_query(&state, query, Category::Courses).await;
    let courses = state.courses.fetch(&query, limit).await;

    if wants_markdown(&params.format) {
        let markdown = format::courses_to_markdown(&courses);
        return Json(serde_json::json!({"markdown": markdown, "data": courses})).into_response();
    }

    Json(courses).into_response()
}
