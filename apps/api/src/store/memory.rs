use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::candidate::CandidateProfile;
use crate::models::records::{
    AssessmentRow, CandidateRow, FitmentScoreRow, RetentionScoreRow, ASSESSMENT_COMPLETED,
    ASSESSMENT_PENDING,
};
use crate::scoring::{FitmentResult, RetentionResult};
use crate::store::{
    new_assessment_token, AssessmentCompletion, CandidateStore, EmailLogEntry, CANDIDATE_ASSESSED,
    CANDIDATE_PENDING,
};

/// One `email_logs` entry as the memory store keeps it.
#[derive(Debug, Clone)]
pub struct EmailLogRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub email_type: String,
    pub recipient_email: String,
    pub subject: String,
    pub status: String,
    pub error_message: Option<String>,
    pub sent_at: DateTime<Utc>,
}

#[derive(Default)]
struct Tables {
    candidates: Vec<CandidateRow>,
    fitments: Vec<FitmentScoreRow>,
    assessments: Vec<AssessmentRow>,
    retentions: Vec<RetentionScoreRow>,
    emails: Vec<EmailLogRow>,
}

/// Process-local store for tests.
#[derive(Default)]
pub struct MemoryCandidateStore {
    tables: Mutex<Tables>,
    finalize_down: AtomicBool,
}

impl MemoryCandidateStore {
    fn with_tables<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> Result<T> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(f(&mut tables))
    }

    /// While set, `finalize_assessment` fails before writing anything.
    pub fn fail_finalize(&self, down: bool) {
        self.finalize_down.store(down, Ordering::SeqCst);
    }

    pub fn fitments(&self) -> Vec<FitmentScoreRow> {
        self.tables.lock().unwrap().fitments.clone()
    }

    pub fn retentions(&self) -> Vec<RetentionScoreRow> {
        self.tables.lock().unwrap().retentions.clone()
    }

    pub fn emails(&self) -> Vec<EmailLogRow> {
        self.tables.lock().unwrap().emails.clone()
    }

    pub fn assessment(&self, token: &str) -> Option<AssessmentRow> {
        self.tables
            .lock()
            .unwrap()
            .assessments
            .iter()
            .find(|a| a.token == token)
            .cloned()
    }
}

#[async_trait]
impl CandidateStore for MemoryCandidateStore {
    async fn save_candidate(
        &self,
        profile: &CandidateProfile,
        resume_key: Option<&str>,
    ) -> Result<Uuid> {
        let data = serde_json::to_value(profile)?;
        self.with_tables(|t| {
            let now = Utc::now();
            if let Some(row) = t.candidates.iter_mut().find(|c| c.email == profile.email) {
                row.name = profile.name.clone();
                row.status = CANDIDATE_PENDING.to_string();
                row.profile = data;
                if let Some(key) = resume_key {
                    row.resume_key = Some(key.to_string());
                }
                row.updated_at = now;
                return row.id;
            }
            let id = Uuid::new_v4();
            t.candidates.push(CandidateRow {
                id,
                email: profile.email.clone(),
                name: profile.name.clone(),
                status: CANDIDATE_PENDING.to_string(),
                profile: data,
                resume_key: resume_key.map(str::to_string),
                created_at: now,
                updated_at: now,
            });
            id
        })
    }

    async fn load_candidate(&self, id: Uuid) -> Result<Option<CandidateRow>> {
        self.with_tables(|t| t.candidates.iter().find(|c| c.id == id).cloned())
    }

    async fn load_by_token(&self, token: &str) -> Result<Option<(CandidateRow, AssessmentRow)>> {
        self.with_tables(|t| {
            let assessment = t.assessments.iter().find(|a| a.token == token)?;
            let candidate = t
                .candidates
                .iter()
                .find(|c| c.id == assessment.candidate_id)?;
            Some((candidate.clone(), assessment.clone()))
        })
    }

    async fn list_candidates(&self, limit: i64) -> Result<Vec<CandidateRow>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        self.with_tables(|t| {
            let mut rows = t.candidates.clone();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            rows.truncate(limit);
            rows
        })
    }

    async fn save_fitment(&self, candidate_id: Uuid, result: &FitmentResult) -> Result<Uuid> {
        self.with_tables(|t| {
            let row = fitment_row(candidate_id, result);
            let id = row.id;
            t.fitments.push(row);
            id
        })
    }

    async fn latest_fitment(&self, candidate_id: Uuid) -> Result<Option<FitmentScoreRow>> {
        self.with_tables(|t| {
            t.fitments
                .iter()
                .rev()
                .find(|f| f.candidate_id == candidate_id)
                .cloned()
        })
    }

    async fn create_assessment(&self, candidate_id: Uuid) -> Result<String> {
        self.with_tables(|t| {
            let token = new_assessment_token();
            t.assessments.push(AssessmentRow {
                id: Uuid::new_v4(),
                candidate_id,
                token: token.clone(),
                status: ASSESSMENT_PENDING.to_string(),
                openness: None,
                conscientiousness: None,
                extraversion: None,
                agreeableness: None,
                neuroticism: None,
                answers: None,
                duration_seconds: None,
                started_at: Utc::now(),
                completed_at: None,
            });
            token
        })
    }

    async fn finalize_assessment(
        &self,
        token: &str,
        completion: &AssessmentCompletion,
    ) -> Result<bool> {
        if self.finalize_down.load(Ordering::SeqCst) {
            bail!("connection reset while finalizing assessment");
        }
        let answers = serde_json::to_value(&completion.answers)?;
        self.with_tables(|t| {
            let Some(row) = t
                .assessments
                .iter_mut()
                .find(|a| a.token == token && a.status == ASSESSMENT_PENDING)
            else {
                return false;
            };
            let traits = completion.traits;
            row.status = ASSESSMENT_COMPLETED.to_string();
            row.openness = Some(traits.openness);
            row.conscientiousness = Some(traits.conscientiousness);
            row.extraversion = Some(traits.extraversion);
            row.agreeableness = Some(traits.agreeableness);
            row.neuroticism = Some(traits.neuroticism);
            row.answers = Some(answers);
            row.duration_seconds = completion
                .duration_seconds
                .map(|d| i32::try_from(d).unwrap_or(i32::MAX));
            row.completed_at = Some(Utc::now());

            let candidate_id = row.candidate_id;
            t.fitments.push(fitment_row(candidate_id, &completion.fitment));
            t.retentions
                .push(retention_row(candidate_id, &completion.retention));
            if let Some(c) = t.candidates.iter_mut().find(|c| c.id == candidate_id) {
                c.status = CANDIDATE_ASSESSED.to_string();
                c.updated_at = Utc::now();
            }
            true
        })
    }

    async fn latest_retention(&self, candidate_id: Uuid) -> Result<Option<RetentionScoreRow>> {
        self.with_tables(|t| {
            t.retentions
                .iter()
                .rev()
                .find(|r| r.candidate_id == candidate_id)
                .cloned()
        })
    }

    async fn log_email(&self, entry: &EmailLogEntry) -> Result<()> {
        self.with_tables(|t| {
            t.emails.push(EmailLogRow {
                id: Uuid::new_v4(),
                candidate_id: entry.candidate_id,
                email_type: entry.email_type.to_string(),
                recipient_email: entry.recipient.clone(),
                subject: entry.subject.clone(),
                status: entry.status().to_string(),
                error_message: entry.error.clone(),
                sent_at: Utc::now(),
            });
        })
    }
}

fn fitment_row(candidate_id: Uuid, result: &FitmentResult) -> FitmentScoreRow {
    let traits = result.big5_trait_scores;
    FitmentScoreRow {
        id: Uuid::new_v4(),
        candidate_id,
        category: result.category.as_str().to_string(),
        raw_dataset_score: result.raw_dataset_score,
        fitment_score: result.fitment_score,
        big5_score: result.big5_score,
        overall_fitment_score: result.overall_fitment_score,
        openness_score: traits.openness,
        conscientiousness_score: traits.conscientiousness,
        extraversion_score: traits.extraversion,
        agreeableness_score: traits.agreeableness,
        neuroticism_score: traits.neuroticism,
        provisional: result.provisional,
        calculated_at: Utc::now(),
    }
}

fn retention_row(candidate_id: Uuid, result: &RetentionResult) -> RetentionScoreRow {
    let c = result.component_scores;
    RetentionScoreRow {
        id: Uuid::new_v4(),
        candidate_id,
        retention_score: result.retention_score,
        retention_risk: result.retention_risk.as_str().to_string(),
        stability: c.stability,
        personality: c.personality,
        engagement: c.engagement,
        fitment_factor: c.fitment_factor,
        risk_flags: result.risk_flags.iter().map(|f| f.to_string()).collect(),
        insights: result.insights.clone(),
        calculated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{BigFiveTraits, CandidateSignals};
    use crate::scoring::{compute_fitment, compute_retention};

    fn profile(email: &str, name: &str) -> CandidateProfile {
        CandidateProfile {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    fn completion() -> AssessmentCompletion {
        let signals = CandidateSignals::default();
        let traits = BigFiveTraits::NEUTRAL;
        let fitment = compute_fitment(&signals, Some(&traits));
        let retention = compute_retention(
            &signals,
            fitment.overall_fitment_score,
            &traits,
            fitment.category,
        );
        AssessmentCompletion {
            traits,
            answers: vec![3; 50],
            duration_seconds: Some(600),
            fitment,
            retention,
        }
    }

    #[tokio::test]
    async fn test_save_candidate_upserts_by_email() {
        let store = MemoryCandidateStore::default();
        let first = store
            .save_candidate(&profile("a@x.io", "Ada"), Some("resumes/1/a.pdf"))
            .await
            .unwrap();
        let second = store
            .save_candidate(&profile("a@x.io", "Ada L."), None)
            .await
            .unwrap();
        assert_eq!(first, second);

        let row = store.load_candidate(first).await.unwrap().unwrap();
        assert_eq!(row.name, "Ada L.");
        assert_eq!(row.resume_key.as_deref(), Some("resumes/1/a.pdf"));
        assert_eq!(store.list_candidates(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_assessment_token_is_single_use() {
        let store = MemoryCandidateStore::default();
        let id = store
            .save_candidate(&profile("b@x.io", "Bo"), None)
            .await
            .unwrap();
        let token = store.create_assessment(id).await.unwrap();

        let completion = completion();
        assert!(store.finalize_assessment(&token, &completion).await.unwrap());
        assert!(!store.finalize_assessment(&token, &completion).await.unwrap());
        assert!(!store.finalize_assessment("nope", &completion).await.unwrap());

        let (candidate, assessment) = store.load_by_token(&token).await.unwrap().unwrap();
        assert_eq!(candidate.status, CANDIDATE_ASSESSED);
        assert!(assessment.is_completed());
        assert_eq!(assessment.openness, Some(25.0));
        assert_eq!(store.fitments().len(), 1);
        assert_eq!(store.retentions().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_finalize_writes_nothing() {
        let store = MemoryCandidateStore::default();
        let id = store
            .save_candidate(&profile("c@x.io", "Cy"), None)
            .await
            .unwrap();
        let token = store.create_assessment(id).await.unwrap();

        store.fail_finalize(true);
        assert!(store.finalize_assessment(&token, &completion()).await.is_err());
        assert!(!store.assessment(&token).unwrap().is_completed());
        assert!(store.fitments().is_empty());
        assert!(store.retentions().is_empty());
        let candidate = store.load_candidate(id).await.unwrap().unwrap();
        assert_eq!(candidate.status, CANDIDATE_PENDING);
    }
}
