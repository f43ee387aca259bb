use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub status: String,
    pub profile: Value,
    pub resume_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FitmentScoreRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub category: String,
    pub raw_dataset_score: f64,
    pub fitment_score: f64,
    pub big5_score: f64,
    pub overall_fitment_score: f64,
    pub openness_score: f64,
    pub conscientiousness_score: f64,
    pub extraversion_score: f64,
    pub agreeableness_score: f64,
    pub neuroticism_score: f64,
    pub provisional: bool,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub token: String,
    pub status: String,
    pub openness: Option<f64>,
    pub conscientiousness: Option<f64>,
    pub extraversion: Option<f64>,
    pub agreeableness: Option<f64>,
    pub neuroticism: Option<f64>,
    pub answers: Option<Value>,
    pub duration_seconds: Option<i32>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl AssessmentRow {
    pub fn is_completed(&self) -> bool {
        self.status == ASSESSMENT_COMPLETED
    }
}

pub const ASSESSMENT_PENDING: &str = "pending";
pub const ASSESSMENT_COMPLETED: &str = "completed";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RetentionScoreRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub retention_score: f64,
    pub retention_risk: String,
    pub stability: f64,
    pub personality: f64,
    pub engagement: f64,
    pub fitment_factor: f64,
    pub risk_flags: Vec<String>,
    pub insights: Vec<String>,
    pub calculated_at: DateTime<Utc>,
}
