use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::CandidateProfile;
use crate::models::records::{CandidateRow, FitmentScoreRow, RetentionScoreRow};
use crate::state::AppState;
use crate::workflow::SubmissionOutcome;

const DEFAULT_LIST_LIMIT: i64 = 50;
const MAX_LIST_LIMIT: i64 = 500;

#[derive(Debug, Deserialize)]
pub struct SubmitApplicationRequest {
    pub profile: CandidateProfile,
    /// Key returned by the resume parse endpoint, if the profile came from an upload.
    pub resume_key: Option<String>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct CandidateDetail {
    pub candidate: CandidateRow,
    pub latest_fitment: Option<FitmentScoreRow>,
    pub latest_retention: Option<RetentionScoreRow>,
}

/// POST /api/v1/candidates
pub async fn handle_submit_application(
    State(state): State<AppState>,
    Json(req): Json<SubmitApplicationRequest>,
) -> Result<(StatusCode, Json<SubmissionOutcome>), AppError> {
    let outcome = state
        .workflow
        .submit_application(req.profile, req.resume_key)
        .await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<CandidateRow>>, AppError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);
    let candidates = state.workflow.store.list_candidates(limit).await?;
    Ok(Json(candidates))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateDetail>, AppError> {
    let store = &state.workflow.store;
    let candidate = store
        .load_candidate(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    let latest_fitment = store.latest_fitment(id).await?;
    let latest_retention = store.latest_retention(id).await?;

    Ok(Json(CandidateDetail {
        candidate,
        latest_fitment,
        latest_retention,
    }))
}
