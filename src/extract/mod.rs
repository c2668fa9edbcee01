//! Text extraction from uploaded files using pdftotext.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Upload extensions accepted by the process-file endpoint.
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "pdf", "png", "jpg", "jpeg", "gif", "doc", "docx"];

/// Whether an uploaded filename carries an accepted extension.
pub fn allowed_file(filename: &str) -> bool {
    extension_of(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Lowercased extension after the final dot, if any.
pub fn extension_of(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// Reduce an uploaded filename to a safe basename: path components are
/// stripped and anything outside [A-Za-z0-9._-] is replaced.
pub fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let cleaned: String = basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle command output, extracting stdout on success or returning an
/// appropriate error.
fn handle_cmd_output(
    result: std::io::Result<std::process::Output>,
    tool_name: &str,
    error_prefix: &str,
) -> Result<String, ExtractionError> {
    match result {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ExtractionError::ExtractionFailed(format!(
                    "{}: {}",
                    error_prefix, stderr
                )))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ExtractionError::ToolNotFound(tool_name.to_string()))
        }
        Err(e) => Err(ExtractionError::Io(e)),
    }
}

/// Text extractor for uploaded files.
#[derive(Debug, Default)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract text from an upload based on its MIME type.
    ///
    /// PDF extraction failures degrade to an error string so the downstream
    /// summary pipeline still has something to chew on; read failures on
    /// plain files propagate. Anything else (images) yields a placeholder.
    pub fn extract(&self, file_path: &Path, filename: &str) -> Result<String, ExtractionError> {
        let mime = mime_guess::from_path(filename).first_or_octet_stream();
        match mime.essence_str() {
            "application/pdf" => Ok(self
                .extract_pdf(file_path)
                .unwrap_or_else(|e| format!("Error extracting text from PDF: {}", e))),
            "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Ok(std::fs::read_to_string(file_path)?)
            }
            m if m.starts_with("text/") => Ok(std::fs::read_to_string(file_path)?),
            _ => Ok(format!("Image file: {}", filename)),
        }
    }

    /// Run pdftotext on a PDF file, writing to stdout.
    fn extract_pdf(&self, file_path: &Path) -> Result<String, ExtractionError> {
        let output = Command::new("pdftotext")
            .arg(file_path)
            .arg("-")
            .output();

        handle_cmd_output(output, "pdftotext (install poppler-utils)", "pdftotext failed")
    }
}
