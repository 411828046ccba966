pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::keywords::handlers as keywords;
use crate::parsing::handlers as parsing;
use crate::profiles::handlers as profiles;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        // Keywords API
        .route("/api/v1/keywords/extract", post(keywords::handle_extract))
        .route("/api/v1/keywords/match", post(keywords::handle_match))
        .route("/api/v1/keywords/density", post(keywords::handle_density))
        .route("/api/v1/keywords/relevance", post(keywords::handle_relevance))
        .route("/api/v1/keywords/report", post(keywords::handle_report))
        // Analysis API
        .route("/api/v1/ats/analyze", post(scoring::handle_ats_analyze))
        .route("/api/v1/resumes/score", post(scoring::handle_score))
        .route("/api/v1/resumes/compare", post(scoring::handle_compare))
        .route("/api/v1/resumes/track", post(scoring::handle_track))
        // Parsing API
        .route("/api/v1/resumes/parse-text", post(parsing::handle_parse_text))
        .route(
            "/api/v1/resumes/parse-pdf",
            post(parsing::handle_parse_pdf).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/text/analyze", post(parsing::handle_analyze_text))
        // Profiles API
        .route("/api/v1/profiles/import", post(profiles::handle_import))
        .route("/api/v1/profiles/linkedin", post(profiles::handle_linkedin))
        .route("/api/v1/profiles/merge", post(profiles::handle_merge))
        .route(
            "/api/v1/profiles/suggestions",
            post(profiles::handle_suggestions),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::models::{PersonalInfo, ResumeDocument};
    use crate::profiles::{
        ProfileError, ProfileImport, ProfilePlatform, ProfileSource, ProfileStats,
    };

    struct StubProfiles;

    #[async_trait]
    impl ProfileSource for StubProfiles {
        async fn import(&self, username: &str) -> Result<ProfileImport, ProfileError> {
            if username == "ghost" {
                return Err(ProfileError::NotFound(username.to_string()));
            }
            Ok(ProfileImport {
                platform: ProfilePlatform::Github,
                profile_url: format!("https://github.com/{username}"),
                resume: ResumeDocument {
                    personal: Some(PersonalInfo {
                        name: Some(username.to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                bio: None,
                stats: Some(ProfileStats::default()),
            })
        }
    }

    fn make_app() -> Router {
        build_router(AppState::new(Config::default(), Arc::new(StubProfiles)))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = make_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = make_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "atslens");
    }

    #[tokio::test]
    async fn test_extract_keywords() {
        let (status, body) = post_json(
            "/api/v1/keywords/extract",
            json!({"job_description": "Required: Python and Docker experience"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let terms: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|k| k["word"].as_str())
            .collect();
        assert!(terms.contains(&"python"));
        assert!(terms.contains(&"docker"));
    }

    #[tokio::test]
    async fn test_match_rejects_out_of_range_threshold() {
        let (status, body) = post_json(
            "/api/v1/keywords/match",
            json!({"job_keywords": [], "resume_keywords": [], "threshold": 1.5}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_ats_analyze() {
        let (status, body) = post_json(
            "/api/v1/ats/analyze",
            json!({
                "resume": {
                    "personal": {"name": "Jane Doe", "email": "jane@example.com"},
                    "summary": "Backend engineer working with Python and Docker",
                    "skills": [{"category": "Tools", "items": ["Python", "Docker"]}]
                },
                "job_description": "We need Python and Docker skills"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let overall = body["overall"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&overall));
    }

    #[tokio::test]
    async fn test_parse_text_rejects_empty_body() {
        let (status, _) = post_json("/api/v1/resumes/parse-text", json!({"text": "  "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_score_empty_resume() {
        let (status, body) = post_json("/api/v1/resumes/score", json!({"resume": {}})).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["score"]["overall"].as_f64().unwrap() < 50.0);
    }

    #[tokio::test]
    async fn test_profile_import() {
        let (status, body) = post_json(
            "/api/v1/profiles/import",
            json!({"url": "https://github.com/octocat"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile_url"], "https://github.com/octocat");
        assert_eq!(body["platform"], "github");

        let (status, body) = post_json(
            "/api/v1/profiles/import",
            json!({"url": "https://github.com/ghost"}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_profile_import_rejects_linkedin() {
        let (status, _) = post_json(
            "/api/v1/profiles/import",
            json!({"url": "https://www.linkedin.com/in/jane"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
