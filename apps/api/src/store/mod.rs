//! Candidate record store.
//!
//! `AppState` carries an `Arc<dyn CandidateStore>`; the PostgreSQL backend is
//! used in production and the in-memory one backs the workflow tests.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::candidate::{BigFiveTraits, CandidateProfile};
use crate::models::records::{AssessmentRow, CandidateRow, FitmentScoreRow, RetentionScoreRow};
use crate::scoring::{FitmentResult, RetentionResult};

pub const CANDIDATE_PENDING: &str = "pending";
pub const CANDIDATE_ASSESSED: &str = "assessed";

/// A scored questionnaire together with the final fitment and retention
/// results derived from it. Written against its token as one unit.
#[derive(Debug, Clone)]
pub struct AssessmentCompletion {
    pub traits: BigFiveTraits,
    pub answers: Vec<u8>,
    pub duration_seconds: Option<u32>,
    pub fitment: FitmentResult,
    pub retention: RetentionResult,
}

/// One delivery attempt, successful or not.
#[derive(Debug, Clone)]
pub struct EmailLogEntry {
    pub candidate_id: Uuid,
    pub email_type: &'static str,
    pub recipient: String,
    pub subject: String,
    pub error: Option<String>,
}

impl EmailLogEntry {
    pub fn status(&self) -> &'static str {
        if self.error.is_none() {
            "sent"
        } else {
            "failed"
        }
    }
}

#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Inserts or replaces the candidate keyed by email and returns its id.
    async fn save_candidate(
        &self,
        profile: &CandidateProfile,
        resume_key: Option<&str>,
    ) -> Result<Uuid>;

    async fn load_candidate(&self, id: Uuid) -> Result<Option<CandidateRow>>;

    /// Resolves an assessment token to its candidate and assessment rows.
    async fn load_by_token(&self, token: &str) -> Result<Option<(CandidateRow, AssessmentRow)>>;

    async fn list_candidates(&self, limit: i64) -> Result<Vec<CandidateRow>>;

    async fn save_fitment(&self, candidate_id: Uuid, result: &FitmentResult) -> Result<Uuid>;

    async fn latest_fitment(&self, candidate_id: Uuid) -> Result<Option<FitmentScoreRow>>;

    /// Opens a pending assessment and returns its one-time token.
    async fn create_assessment(&self, candidate_id: Uuid) -> Result<String>;

    /// Atomically marks a pending assessment completed, stores the final
    /// fitment and retention results and flags the candidate as assessed.
    /// Returns `false` when the token is unknown or was already used. On error
    /// nothing is written and the token stays pending.
    async fn finalize_assessment(
        &self,
        token: &str,
        completion: &AssessmentCompletion,
    ) -> Result<bool>;

    async fn latest_retention(&self, candidate_id: Uuid) -> Result<Option<RetentionScoreRow>>;

    async fn log_email(&self, entry: &EmailLogEntry) -> Result<()>;
}

/// 32 hex characters, unguessable, single use.
pub fn new_assessment_token() -> String {
    Uuid::new_v4().simple().to_string()
}
