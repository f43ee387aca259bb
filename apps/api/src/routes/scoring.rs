use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::candidate::{BigFiveTraits, CandidateSignals};
use crate::scoring::{compute_fitment, compute_retention, Category, FitmentResult, RetentionResult};

#[derive(Debug, Deserialize)]
pub struct FitmentRequest {
    pub signals: CandidateSignals,
    /// Omit for a provisional score on the neutral personality profile.
    pub traits: Option<BigFiveTraits>,
}

#[derive(Debug, Deserialize)]
pub struct RetentionRequest {
    pub signals: CandidateSignals,
    pub traits: BigFiveTraits,
    /// Overall fitment score the retention factor is computed from.
    pub fitment_score: f64,
    /// Defaults to the category classified from `signals`.
    pub category: Option<Category>,
}

/// POST /api/v1/scoring/fitment
pub async fn handle_fitment(
    Json(req): Json<FitmentRequest>,
) -> Result<Json<FitmentResult>, AppError> {
    req.signals.validate()?;
    if let Some(traits) = &req.traits {
        traits.validate()?;
    }
    Ok(Json(compute_fitment(&req.signals, req.traits.as_ref())))
}

/// POST /api/v1/scoring/retention
pub async fn handle_retention(
    Json(req): Json<RetentionRequest>,
) -> Result<Json<RetentionResult>, AppError> {
    req.signals.validate()?;
    req.traits.validate()?;
    if !req.fitment_score.is_finite() || !(0.0..=100.0).contains(&req.fitment_score) {
        return Err(AppError::Validation(format!(
            "fitment_score must be within 0..=100 (got {})",
            req.fitment_score
        )));
    }

    let category = req.category.unwrap_or_else(|| {
        Category::classify(req.signals.longevity_years, req.signals.average_experience)
    });
    Ok(Json(compute_retention(
        &req.signals,
        req.fitment_score,
        &req.traits,
        category,
    )))
}
