//! Axum route handlers for the LLM-backed rewrite API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::optimize::email::{optimize_email, OptimizedEmail};
use crate::optimize::rewrite::optimize_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub jd: String,
    #[serde(default)]
    pub resume: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub optimized_latex: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailOptimizeRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub subject: String,
}

/// POST /api/optimize
///
/// Rewrites the résumé LaTeX against the job description.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if request.jd.trim().is_empty() {
        return Err(AppError::Validation("Job description is required".to_string()));
    }
    if request.resume.trim().is_empty() {
        return Err(AppError::Validation("Resume LaTeX is required".to_string()));
    }

    let optimized_latex = optimize_resume(&request.jd, &request.resume, &state.llm).await?;
    Ok(Json(OptimizeResponse { optimized_latex }))
}

/// POST /api/email-optimize
///
/// Personalizes the outreach email template against the role description.
pub async fn handle_email_optimize(
    State(state): State<AppState>,
    Json(request): Json<EmailOptimizeRequest>,
) -> Result<Json<OptimizedEmail>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation("Email context is required".to_string()));
    }
    if request.template.trim().is_empty() {
        return Err(AppError::Validation("Email template is required".to_string()));
    }

    let optimized = optimize_email(
        &request.description,
        &request.template,
        &request.subject,
        &state.llm,
    )
    .await?;
    Ok(Json(optimized))
}
