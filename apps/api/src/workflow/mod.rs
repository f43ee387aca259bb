//! Application pipeline: submission, then personality assessment.
//!
//! submit_application  -> preliminary fitment (neutral personality) -> token -> confirmation mail
//! complete_assessment -> traits -> final fitment -> retention -> results mail

pub mod handlers;

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::questionnaire::{score_answers, Question, QUESTIONS};
use crate::assessment::AnswerError;
use crate::config::assessment_link;
use crate::models::candidate::{BigFiveTraits, CandidateProfile, SignalError};
use crate::notify::templates::{self, Email};
use crate::notify::Notifier;
use crate::scoring::{compute_fitment, compute_retention, Category, FitmentResult, RetentionResult};
use crate::store::{AssessmentCompletion, CandidateStore, EmailLogEntry};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Signals(#[from] SignalError),

    #[error(transparent)]
    Answers(#[from] AnswerError),

    #[error("candidate email is required")]
    MissingEmail,

    #[error("assessment token not found")]
    UnknownToken,

    #[error("assessment has already been completed")]
    AlreadyCompleted,

    #[error("stored candidate record is unreadable: {0}")]
    CorruptRecord(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct SubmissionOutcome {
    pub candidate_id: Uuid,
    pub category: Category,
    pub preliminary_fitment: FitmentResult,
    pub assessment_token: String,
    pub assessment_link: String,
    pub email_sent: bool,
}

#[derive(Debug, Serialize)]
pub struct AssessmentInvite {
    pub candidate_name: String,
    pub questions: &'static [Question],
}

#[derive(Debug, Serialize)]
pub struct AssessmentOutcome {
    pub candidate_id: Uuid,
    pub traits: BigFiveTraits,
    pub fitment: FitmentResult,
    pub retention: RetentionResult,
    pub email_sent: bool,
}

#[derive(Clone)]
pub struct HiringWorkflow {
    pub store: Arc<dyn CandidateStore>,
    pub notifier: Arc<dyn Notifier>,
    pub assessment_base_url: String,
}

impl HiringWorkflow {
    pub fn new(
        store: Arc<dyn CandidateStore>,
        notifier: Arc<dyn Notifier>,
        assessment_base_url: String,
    ) -> Self {
        Self {
            store,
            notifier,
            assessment_base_url,
        }
    }

    /// Records a confirmed profile, scores it provisionally and invites the
    /// candidate to the personality assessment. Email failure is not fatal.
    pub async fn submit_application(
        &self,
        profile: CandidateProfile,
        resume_key: Option<String>,
    ) -> Result<SubmissionOutcome, WorkflowError> {
        profile.signals.validate()?;
        if profile.email.trim().is_empty() {
            return Err(WorkflowError::MissingEmail);
        }

        let preliminary = compute_fitment(&profile.signals, None);

        let candidate_id = self
            .store
            .save_candidate(&profile, resume_key.as_deref())
            .await?;
        self.store.save_fitment(candidate_id, &preliminary).await?;
        let token = self.store.create_assessment(candidate_id).await?;
        let link = assessment_link(&self.assessment_base_url, &token);

        info!(
            "Application from {} scored {:.2} provisionally ({})",
            profile.email, preliminary.overall_fitment_score, preliminary.category
        );

        let email = templates::confirmation(&profile.name, &link);
        let email_sent = self.deliver(candidate_id, &profile.email, &email).await;

        Ok(SubmissionOutcome {
            candidate_id,
            category: preliminary.category,
            preliminary_fitment: preliminary,
            assessment_token: token,
            assessment_link: link,
            email_sent,
        })
    }

    /// Resolves a token for the questionnaire page.
    pub async fn open_assessment(&self, token: &str) -> Result<AssessmentInvite, WorkflowError> {
        let (candidate, assessment) = self
            .store
            .load_by_token(token)
            .await?
            .ok_or(WorkflowError::UnknownToken)?;
        if assessment.is_completed() {
            return Err(WorkflowError::AlreadyCompleted);
        }
        Ok(AssessmentInvite {
            candidate_name: candidate.name,
            questions: &QUESTIONS,
        })
    }

    /// Scores the answer sheet and produces the final fitment and retention
    /// assessment. A token can be completed once; if storing the results
    /// fails the token stays open and the candidate can resubmit.
    pub async fn complete_assessment(
        &self,
        token: &str,
        answers: &[u8],
        duration_seconds: Option<u32>,
    ) -> Result<AssessmentOutcome, WorkflowError> {
        let (candidate, assessment) = self
            .store
            .load_by_token(token)
            .await?
            .ok_or(WorkflowError::UnknownToken)?;
        if assessment.is_completed() {
            return Err(WorkflowError::AlreadyCompleted);
        }

        let traits = score_answers(answers)?;
        let profile: CandidateProfile = serde_json::from_value(candidate.profile)
            .map_err(|e| WorkflowError::CorruptRecord(e.to_string()))?;

        let fitment = compute_fitment(&profile.signals, Some(&traits));
        let retention = compute_retention(
            &profile.signals,
            fitment.overall_fitment_score,
            &traits,
            fitment.category,
        );

        let completion = AssessmentCompletion {
            traits,
            answers: answers.to_vec(),
            duration_seconds,
            fitment,
            retention,
        };
        if !self.store.finalize_assessment(token, &completion).await? {
            return Err(WorkflowError::AlreadyCompleted);
        }
        let AssessmentCompletion {
            fitment, retention, ..
        } = completion;

        info!(
            "Candidate {} final fitment {:.2}, retention {:.2} ({} risk, {} flags)",
            candidate.id,
            fitment.overall_fitment_score,
            retention.retention_score,
            retention.retention_risk,
            retention.flag_count
        );

        let email = templates::results(&candidate.name, &fitment, &retention);
        let email_sent = self.deliver(candidate.id, &candidate.email, &email).await;

        Ok(AssessmentOutcome {
            candidate_id: candidate.id,
            traits,
            fitment,
            retention,
            email_sent,
        })
    }

    /// Sends and logs one email. Never fails the caller.
    async fn deliver(&self, candidate_id: Uuid, recipient: &str, email: &Email) -> bool {
        let result = self
            .notifier
            .send(recipient, &email.subject, &email.body)
            .await;
        if let Err(e) = &result {
            warn!("Failed to send {} email to {recipient}: {e}", email.kind);
        }

        let entry = EmailLogEntry {
            candidate_id,
            email_type: email.kind,
            recipient: recipient.to_string(),
            subject: email.subject.clone(),
            error: result.as_ref().err().map(|e| e.to_string()),
        };
        if let Err(e) = self.store.log_email(&entry).await {
            warn!("Failed to log {} email for candidate {candidate_id}: {e:#}", email.kind);
        }

        result.is_ok()
    }
}
