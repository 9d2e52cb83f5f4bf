use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::error::{ShortenError, Stage};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::bad_request("Invalid request body", json!(errors))
    }
}

/// Maps pipeline failures to client-facing errors.
///
/// Server-side failures only expose the stage that failed; the underlying
/// cause is expected to be logged by the caller.
impl From<ShortenError> for AppError {
    fn from(e: ShortenError) -> Self {
        let stage = e.stage().as_str();
        match e {
            ShortenError::InvalidInput(reason) => {
                AppError::bad_request("Invalid URL", json!({ "reason": reason }))
            }
            ShortenError::NotFound(keyword) => {
                AppError::not_found("URL not found", json!({ "keyword": keyword }))
            }
            ShortenError::Fetch { .. } => {
                AppError::internal("Failed to fetch page metadata", json!({ "stage": stage }))
            }
            ShortenError::Generation(_) => {
                AppError::internal("Failed to generate keyword", json!({ "stage": stage }))
            }
            ShortenError::DuplicateKey(_) => AppError::internal(
                "Generated keyword is already in use",
                json!({ "stage": stage }),
            ),
            ShortenError::Storage {
                stage: Stage::Resolving,
                ..
            } => AppError::internal("Failed to look up URL", json!({ "stage": stage })),
            ShortenError::Storage { .. } => {
                AppError::internal("Failed to store URL", json!({ "stage": stage }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::GenerationError;

    #[test]
    fn test_invalid_input_is_bad_request() {
        let err = AppError::from(ShortenError::InvalidInput("bad scheme".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_error_info().code, "validation_error");
    }

    #[test]
    fn test_not_found_is_404() {
        let err = AppError::from(ShortenError::NotFound("missing".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_error_info().details["keyword"], "missing");
    }

    #[test]
    fn test_pipeline_failures_are_500_without_upstream_text() {
        let errors = [
            ShortenError::Fetch { status: 503 },
            ShortenError::Generation(GenerationError::Upstream("secret upstream text".into())),
            ShortenError::DuplicateKey("sample".into()),
            ShortenError::storage(Stage::Storing, "disk I/O error"),
        ];

        for e in errors {
            let err = AppError::from(e);
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let info = err.to_error_info();
            let rendered = serde_json::to_string(&info).unwrap();
            assert!(!rendered.contains("secret upstream text"));
            assert!(!rendered.contains("disk I/O error"));
            assert!(info.details["stage"].is_string());
        }
    }

    #[test]
    fn test_lookup_storage_failure_reports_resolving() {
        let err = AppError::from(ShortenError::storage(Stage::Resolving, "no such table"));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let info = err.to_error_info();
        assert_eq!(info.message, "Failed to look up URL");
        assert_eq!(info.details["stage"], "resolving");
    }
}
