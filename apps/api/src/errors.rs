use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::compiler::CompileError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("GEMINI_API_KEY is not configured")]
    LlmMissingKey,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::LlmMissingKey => (
                StatusCode::SERVICE_UNAVAILABLE,
                "LLM_KEY_MISSING",
                "GEMINI_API_KEY is not configured on the server".to_string(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM upstream error: {msg}");
                (StatusCode::BAD_GATEWAY, "LLM_UPSTREAM", msg.clone())
            }
            AppError::Compile(err) => compile_response(err),
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

/// Maps compiler failures onto HTTP statuses. Engine diagnostics are shown
/// verbatim — they are already truncated to a bounded tail and contain only
/// engine output.
fn compile_response(err: &CompileError) -> (StatusCode, &'static str, String) {
    match err {
        CompileError::EmptyInput => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
        }
        CompileError::EngineUnavailable(_) => {
            tracing::error!("typesetting engine unavailable: {err}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "ENGINE_UNAVAILABLE",
                err.to_string(),
            )
        }
        CompileError::Engine(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "COMPILATION_FAILED",
            err.to_string(),
        ),
        CompileError::Workspace(e) => {
            tracing::error!("compile workspace I/O error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(AppError::Validation("nope".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_missing_key_maps_to_503() {
        assert_eq!(status_of(AppError::LlmMissingKey), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_llm_upstream_maps_to_502() {
        assert_eq!(
            status_of(AppError::Llm("boom".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_compile_errors_map_by_variant() {
        assert_eq!(
            status_of(AppError::Compile(CompileError::EmptyInput)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Compile(CompileError::EngineUnavailable(
                "gone".to_string()
            ))),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(AppError::Compile(CompileError::Engine("tail".to_string()))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
