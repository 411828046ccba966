//! Axum route handlers for resume text and PDF parsing.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::ResumeDocument;
use crate::parsing::pdf::parse_pdf_resume;
use crate::parsing::sections::parse_resume_text;
use crate::parsing::text::{
    analyze_text, clean_text, extract_contact_info, normalize_resume, ContactInfo, TextStats,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
    /// Clean fields and standardize dates before returning.
    #[serde(default)]
    pub normalize: bool,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeTextResponse {
    pub cleaned: String,
    pub contact: ContactInfo,
    pub stats: TextStats,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse-text
pub async fn handle_parse_text(
    Json(request): Json<ParseTextRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let resume = parse_resume_text(&request.text);
    let resume = if request.normalize {
        normalize_resume(&resume)
    } else {
        resume
    };
    Ok(Json(resume))
}

/// POST /api/v1/resumes/parse-pdf
///
/// Multipart upload with the document in a field named `file`.
pub async fn handle_parse_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeDocument>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("invalid file: {e}")))?;
        if data.len() > state.config.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "file exceeds {} bytes",
                state.config.max_upload_bytes
            )));
        }

        let size = data.len();
        let resume = parse_pdf_resume(data).await?;
        info!(
            bytes = size,
            experience = resume.experience.len(),
            "parsed pdf resume"
        );
        return Ok(Json(resume));
    }

    Err(AppError::Validation("missing multipart field 'file'".to_string()))
}

/// POST /api/v1/text/analyze
///
/// Cleaned text, contact details and word statistics for arbitrary text.
pub async fn handle_analyze_text(
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeTextResponse>, AppError> {
    let cleaned = clean_text(&request.text);
    Ok(Json(AnalyzeTextResponse {
        contact: extract_contact_info(&request.text),
        stats: analyze_text(&cleaned),
        cleaned,
    }))
}
