//! Axum route handlers for the Keywords API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::validate_threshold;
use crate::errors::AppError;
use crate::keywords::density::{analyze_density, DensityEntry};
use crate::keywords::extractor::{extract_job_keywords, extract_single_keywords};
use crate::keywords::matcher::{match_keywords, MatchResult};
use crate::keywords::relevance::{analyze_relevance, KeywordRelevance};
use crate::keywords::report::{generate_keyword_report, KeywordReport};
use crate::models::{Industry, JobLevel, Keyword, ResumeDocument};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractMode {
    /// Vocabulary and custom phrases weighted by requirement wording.
    #[default]
    Job,
    /// Every non-stopword weighted by term frequency.
    Single,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub job_description: String,
    #[serde(default)]
    pub mode: ExtractMode,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job_keywords: Vec<Keyword>,
    pub resume_keywords: Vec<Keyword>,
    pub threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub coverage: f64,
}

#[derive(Debug, Deserialize)]
pub struct DensityRequest {
    pub text: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RelevanceRequest {
    pub job_description: String,
    pub industry: Option<Industry>,
    pub job_level: Option<JobLevel>,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub resume: ResumeDocument,
    pub job_description: String,
    pub industry: Option<Industry>,
    pub threshold: Option<f64>,
}

fn resolve_threshold(state: &AppState, threshold: Option<f64>) -> Result<f64, AppError> {
    let threshold = threshold.unwrap_or(state.analysis.fuzzy_threshold);
    validate_threshold(threshold).map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(threshold)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/keywords/extract
pub async fn handle_extract(
    Json(request): Json<ExtractRequest>,
) -> Result<Json<Vec<Keyword>>, AppError> {
    let keywords = match request.mode {
        ExtractMode::Job => extract_job_keywords(&request.job_description),
        ExtractMode::Single => extract_single_keywords(&request.job_description),
    };
    Ok(Json(keywords))
}

/// POST /api/v1/keywords/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let threshold = resolve_threshold(&state, request.threshold)?;
    let result = match_keywords(&request.job_keywords, &request.resume_keywords, threshold);
    let coverage = result.coverage();
    Ok(Json(MatchResponse { result, coverage }))
}

/// POST /api/v1/keywords/density
pub async fn handle_density(
    Json(request): Json<DensityRequest>,
) -> Result<Json<Vec<DensityEntry>>, AppError> {
    Ok(Json(analyze_density(&request.text, &request.keywords)))
}

/// POST /api/v1/keywords/relevance
///
/// Extracts job keywords and ranks them for the target industry and level.
pub async fn handle_relevance(
    State(state): State<AppState>,
    Json(request): Json<RelevanceRequest>,
) -> Result<Json<Vec<KeywordRelevance>>, AppError> {
    let config = state
        .analysis
        .with_overrides(request.industry, request.job_level, None);
    let keywords = extract_job_keywords(&request.job_description);
    Ok(Json(analyze_relevance(
        &keywords,
        config.industry,
        config.job_level,
    )))
}

/// POST /api/v1/keywords/report
pub async fn handle_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<KeywordReport>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    let threshold = resolve_threshold(&state, request.threshold)?;
    let industry = request.industry.unwrap_or(state.analysis.industry);

    let report =
        generate_keyword_report(&request.resume, &request.job_description, industry, threshold);
    info!(
        match_score = report.match_score,
        total_keywords = report.total_keywords,
        "keyword report generated"
    );
    Ok(Json(report))
}
