use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::parsing::pdf::PdfError;
use crate::profiles::ProfileError;
use crate::scoring::AnalysisError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PdfError> for AppError {
    fn from(err: PdfError) -> Self {
        match err {
            PdfError::NotPdf | PdfError::Empty | PdfError::Extraction(_) => {
                AppError::UnprocessableEntity(err.to_string())
            }
            PdfError::Task(e) => AppError::Internal(anyhow::Error::new(e)),
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::InvalidUrl(_) | ProfileError::Unsupported(_) => {
                AppError::Validation(err.to_string())
            }
            ProfileError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProfileError::RateLimited | ProfileError::Status(_) | ProfileError::Http(_) => {
                AppError::Upstream(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::Analysis(e) => {
                tracing::error!("Analysis error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ANALYSIS_FAILED",
                    "analysis failed".to_string(),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "A profile provider error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::UnprocessableEntity("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::Analysis(AnalysisError::Failed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AppError::Upstream("x".into()), StatusCode::BAD_GATEWAY),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_profile_errors_map_to_client_or_gateway() {
        assert!(matches!(
            AppError::from(ProfileError::InvalidUrl("nope".into())),
            AppError::Validation(_)
        ));
        assert!(matches!(
            AppError::from(ProfileError::NotFound("ghost".into())),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(ProfileError::RateLimited),
            AppError::Upstream(_)
        ));
    }

    #[test]
    fn test_pdf_errors_are_unprocessable() {
        assert!(matches!(
            AppError::from(PdfError::Empty),
            AppError::UnprocessableEntity(_)
        ));
    }
}
