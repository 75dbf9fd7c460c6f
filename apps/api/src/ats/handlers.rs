//! Axum route handler for the ATS scoring API.

use axum::Json;
use serde::Deserialize;

use crate::ats::scoring::{score_resume, ScoreResult};

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    /// Missing fields are treated as empty strings — scoring never fails.
    #[serde(default)]
    pub jd: String,
    #[serde(default)]
    pub resume: String,
}

/// POST /api/ats-score
///
/// Computes keyword coverage of the résumé against the job description.
pub async fn handle_ats_score(Json(request): Json<AtsScoreRequest>) -> Json<ScoreResult> {
    Json(score_resume(&request.jd, &request.resume))
}
