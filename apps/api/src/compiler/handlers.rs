//! Axum route handler for the compile API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompileRequest {
    #[serde(default)]
    pub latex: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResponse {
    pub pdf_base64: String,
}

/// POST /api/compile
///
/// Compiles the submitted LaTeX and returns the PDF base64-encoded.
pub async fn handle_compile(
    State(state): State<AppState>,
    Json(request): Json<CompileRequest>,
) -> Result<Json<CompileResponse>, AppError> {
    if request.latex.trim().is_empty() {
        return Err(AppError::Validation("LaTeX content is required".to_string()));
    }

    let pdf_base64 = state.compiler.compile(&request.latex).await?;
    Ok(Json(CompileResponse { pdf_base64 }))
}
