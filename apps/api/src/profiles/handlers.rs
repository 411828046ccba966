//! Axum route handlers for profile import and merging.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::ResumeDocument;
use crate::profiles::github::extract_github_username;
use crate::profiles::linkedin::{resume_from_linkedin, validate_linkedin_url, LinkedInProfile};
use crate::profiles::{
    merge_profile_data, profile_suggestions, ProfileError, ProfileImport, ProfilePlatform,
    ProfileSuggestion,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkedInImportRequest {
    pub url: String,
    pub profile: LinkedInProfile,
}

#[derive(Debug, Deserialize)]
pub struct MergeRequest {
    pub resume: ResumeDocument,
    pub imported: ResumeDocument,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    pub resume: ResumeDocument,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profiles/import
///
/// Fetches a GitHub profile. Other platforms cannot be fetched remotely.
pub async fn handle_import(
    State(state): State<AppState>,
    Json(request): Json<ImportRequest>,
) -> Result<Json<ProfileImport>, AppError> {
    let platform = ProfilePlatform::detect(&request.url)?;
    if platform != ProfilePlatform::Github {
        return Err(ProfileError::Unsupported(format!(
            "{platform:?} profiles cannot be fetched; only GitHub imports are supported"
        ))
        .into());
    }

    let username = extract_github_username(&request.url)
        .ok_or_else(|| ProfileError::InvalidUrl(request.url.clone()))?;
    let import = state.profiles.import(&username).await?;
    info!(
        username = %username,
        projects = import.resume.projects.len(),
        "profile imported"
    );
    Ok(Json(import))
}

/// POST /api/v1/profiles/linkedin
///
/// Converts LinkedIn profile fields supplied by the client.
pub async fn handle_linkedin(
    Json(request): Json<LinkedInImportRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    if !validate_linkedin_url(&request.url) {
        return Err(ProfileError::InvalidUrl(request.url).into());
    }
    Ok(Json(resume_from_linkedin(&request.profile, &request.url)))
}

/// POST /api/v1/profiles/merge
pub async fn handle_merge(
    Json(request): Json<MergeRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(merge_profile_data(&request.resume, &request.imported)))
}

/// POST /api/v1/profiles/suggestions
pub async fn handle_suggestions(
    Json(request): Json<SuggestionsRequest>,
) -> Result<Json<Vec<ProfileSuggestion>>, AppError> {
    Ok(Json(profile_suggestions(&request.resume)))
}
