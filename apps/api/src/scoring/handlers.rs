//! Axum route handlers for ATS analysis and resume quality scoring.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::config::{validate_threshold, AnalysisConfig};
use crate::errors::AppError;
use crate::models::{Industry, JobLevel, ResumeDocument};
use crate::scoring::ats::{analyze_ats, AtsAnalysis};
use crate::scoring::quality::{
    compare_resumes, generate_score_report, score_resume, track_improvement, Comparison,
    NamedResume, ScoreImprovement, ScoreReport,
};
use crate::state::AppState;

const MAX_COMPARED_RESUMES: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    pub resume: ResumeDocument,
    pub job_description: String,
    pub threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume: ResumeDocument,
    pub industry: Option<Industry>,
    pub job_level: Option<JobLevel>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub resumes: Vec<NamedResume>,
    pub industry: Option<Industry>,
    pub job_level: Option<JobLevel>,
}

#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    pub previous: ResumeDocument,
    pub current: ResumeDocument,
    pub industry: Option<Industry>,
    pub job_level: Option<JobLevel>,
}

fn analysis_config(
    state: &AppState,
    industry: Option<Industry>,
    job_level: Option<JobLevel>,
) -> AnalysisConfig {
    state.analysis.with_overrides(industry, job_level, None)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/analyze
pub async fn handle_ats_analyze(
    State(state): State<AppState>,
    Json(request): Json<AtsRequest>,
) -> Result<Json<AtsAnalysis>, AppError> {
    if let Some(threshold) = request.threshold {
        validate_threshold(threshold)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }
    let config = state
        .analysis
        .with_overrides(None, None, request.threshold);

    let analysis = analyze_ats(&request.resume, &request.job_description, &config)?;
    info!(
        overall = analysis.overall,
        missing = analysis.missing_keywords.len(),
        "ats analysis served"
    );
    Ok(Json(analysis))
}

/// POST /api/v1/resumes/score
///
/// Quality score with benchmark, summary and next steps.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    let config = analysis_config(&state, request.industry, request.job_level);
    let report = generate_score_report(&request.resume, &config)?;
    info!(
        overall = report.score.overall,
        industry = %config.industry,
        "resume scored"
    );
    Ok(Json(report))
}

/// POST /api/v1/resumes/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<Comparison>, AppError> {
    if request.resumes.len() > MAX_COMPARED_RESUMES {
        return Err(AppError::Validation(format!(
            "at most {MAX_COMPARED_RESUMES} resumes can be compared"
        )));
    }
    let config = analysis_config(&state, request.industry, request.job_level);
    Ok(Json(compare_resumes(&request.resumes, &config)?))
}

/// POST /api/v1/resumes/track
///
/// Scores two revisions of a resume and reports what moved.
pub async fn handle_track(
    State(state): State<AppState>,
    Json(request): Json<TrackRequest>,
) -> Result<Json<ScoreImprovement>, AppError> {
    let config = analysis_config(&state, request.industry, request.job_level);
    let previous = score_resume(&request.previous, &config)?;
    let current = score_resume(&request.current, &config)?;
    Ok(Json(track_improvement(&previous, &current)))
}
