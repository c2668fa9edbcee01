//! Document, text, and chat processing endpoints.

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::super::AppState;
use crate::extract::{allowed_file, sanitize_filename, ExtractionError};
use crate::format;
use crate::llm::truncate_chars;
use crate::models::Category;

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[derive(Debug, Deserialize)]
pub struct ProcessTextRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_action")]
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

fn default_action() -> String {
    "summary".to_string()
}

/// POST /api/chat
pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    if req.message.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No message provided");
    }

    let response = state
        .gemini
        .respond_auto(&req.message, req.message.chars().count())
        .await;
    Json(json!({"success": true, "response": response})).into_response()
}

/// POST /api/process-text
pub async fn process_text(
    State(state): State<AppState>,
    Json(req): Json<ProcessTextRequest>,
) -> Response {
    if req.text.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No text provided");
    }

    let result = process_text_content(&state, &req.text, &req.action).await;
    Json(json!({"success": true, "result": result, "action": req.action})).into_response()
}

async fn process_text_content(state: &AppState, text: &str, action: &str) -> String {
    let input_chars = text.chars().count();
    let prompt = match action {
        "summary" => format!("Summarize this text in markdown:\n\n{}", text),
        "roadmap" => format!("Create a detailed learning roadmap:\n\n{}", text),
        _ => format!("Analyze this text: {}", text),
    };
    state.gemini.respond_auto(&prompt, input_chars).await
}

/// POST /api/process-file (multipart)
pub async fn process_file(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut action = default_action();
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("action") => match field.text().await {
                Ok(text) => action = text,
                Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
            },
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => upload = Some((filename, bytes.to_vec())),
                    Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
                }
            }
            _ => {}
        }
    }

    let Some((filename, data)) = upload else {
        return error_response(StatusCode::BAD_REQUEST, "No file provided");
    };
    if filename.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No file selected");
    }
    // Rejected before anything is written or any scrape/model call runs.
    if !allowed_file(&filename) {
        return error_response(StatusCode::BAD_REQUEST, "File type not allowed");
    }

    let filename = sanitize_filename(&filename);
    if let Err(e) = std::fs::create_dir_all(&state.upload_dir) {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
    }
    let filepath = state.upload_dir.join(&filename);
    if let Err(e) = std::fs::write(&filepath, &data) {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
    }

    match process_file_content(&state, &filename, &action, &filepath).await {
        Ok(result) => {
            // Staged upload is removed as soon as processing finishes. The
            // error arm below returns without reaching this point, so a
            // failed extraction leaves the file behind.
            if let Err(e) = std::fs::remove_file(&filepath) {
                warn!("Failed to remove staged upload {}: {}", filepath.display(), e);
            }
            Json(json!({
                "success": true,
                "result": result,
                "filename": filename,
                "action": action,
            }))
            .into_response()
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}

async fn process_file_content(
    state: &AppState,
    filename: &str,
    action: &str,
    filepath: &Path,
) -> Result<String, ExtractionError> {
    let file_text = state.extractor.extract(filepath, filename)?;
    let input_chars = file_text.chars().count();

    let result = match action {
        "summary" => {
            let prompt = format!("Summarize this document in markdown:\n\n{}...", file_text);
            state.gemini.respond_auto(&prompt, input_chars).await
        }
        "roadmap" => {
            let prompt = format!(
                "Create a learning roadmap in markdown:\n\n{}...",
                truncate_chars(&file_text, 500)
            );
            state.gemini.respond_auto(&prompt, input_chars).await
        }
        "jobs" => {
            let topics = state.topics.from_document(&file_text, Category::Jobs).await;
            let jobs = state.jobs.fetch(&topics, "gujarat", 5).await;
            let markdown = if jobs.is_empty() {
                "No related jobs found.".to_string()
            } else {
                format::jobs_to_markdown(&jobs)
            };
            format!(
                "## Document Analysis: {}\n\n### Related Jobs Found:\n\n{}",
                topics, markdown
            )
        }
        "courses" => {
            let topics = state
                .topics
                .from_document(&file_text, Category::Courses)
                .await;
            let courses = state.courses.fetch(&topics, 5).await;
            let markdown = if courses.is_empty() {
                "No related courses found.".to_string()
            } else {
                format::courses_to_markdown(&courses)
            };
            format!(
                "## Document Analysis: {}\n\n### Related Courses Found:\n\n{}",
                topics, markdown
            )
        }
        "ai-tools" => {
            let topics = state
                .topics
                .from_document(&file_text, Category::AiTools)
                .await;
            let tools = state.tools.fetch(&topics, 5).await;
            let markdown = if tools.is_empty() {
                "No related AI tools found.".to_string()
            } else {
                format::tools_to_markdown(&tools)
            };
            format!(
                "## Document Analysis: {}\n\n### Related AI Tools Found:\n\n{}",
                topics, markdown
            )
        }
        _ => {
            let prompt = format!(
                "Analyze this document: {}...",
                truncate_chars(&file_text, 4000)
            );
            state.gemini.respond_auto(&prompt, input_chars).await
        }
    };

    Ok(result)
}
