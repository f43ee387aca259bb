use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::workflow::{AssessmentInvite, AssessmentOutcome};

#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    /// One answer per question, in question order, each 1..=5.
    pub answers: Vec<u8>,
    pub duration_seconds: Option<u32>,
}

/// GET /api/v1/assessments/:token
pub async fn handle_open_assessment(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<AssessmentInvite>, AppError> {
    Ok(Json(state.workflow.open_assessment(&token).await?))
}

/// POST /api/v1/assessments/:token
pub async fn handle_submit_answers(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Result<Json<AssessmentOutcome>, AppError> {
    let outcome = state
        .workflow
        .complete_assessment(&token, &req.answers, req.duration_seconds)
        .await?;
    Ok(Json(outcome))
}
