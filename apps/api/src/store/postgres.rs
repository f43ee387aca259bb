use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::info;
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

#[derive(Clone)]
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn save_candidate(
        &self,
        profile: &CandidateProfile,
        resume_key: Option<&str>,
    ) -> Result<Uuid> {
        let data = serde_json::to_value(profile)?;
        // Re-applying with the same email replaces the earlier submission.
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO candidates (id, email, name, status, profile, resume_key)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email) DO UPDATE
               SET name = EXCLUDED.name,
                   status = EXCLUDED.status,
                   profile = EXCLUDED.profile,
                   resume_key = COALESCE(EXCLUDED.resume_key, candidates.resume_key),
                   updated_at = now()
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&profile.email)
        .bind(&profile.name)
        .bind(CANDIDATE_PENDING)
        .bind(&data)
        .bind(resume_key)
        .fetch_one(&self.pool)
        .await?;

        info!("Saved candidate {id}");
        Ok(id)
    }

    async fn load_candidate(&self, id: Uuid) -> Result<Option<CandidateRow>> {
        Ok(
            sqlx::query_as::<_, CandidateRow>("SELECT * FROM candidates WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn load_by_token(&self, token: &str) -> Result<Option<(CandidateRow, AssessmentRow)>> {
        let assessment =
            sqlx::query_as::<_, AssessmentRow>("SELECT * FROM assessments WHERE token = $1")
                .bind(token)
                .fetch_optional(&self.pool)
                .await?;

        let Some(assessment) = assessment else {
            return Ok(None);
        };

        let candidate = self.load_candidate(assessment.candidate_id).await?;
        Ok(candidate.map(|c| (c, assessment)))
    }

    async fn list_candidates(&self, limit: i64) -> Result<Vec<CandidateRow>> {
        Ok(sqlx::query_as::<_, CandidateRow>(
            "SELECT * FROM candidates ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn save_fitment(&self, candidate_id: Uuid, result: &FitmentResult) -> Result<Uuid> {
        let mut conn = self.pool.acquire().await?;
        insert_fitment(&mut conn, candidate_id, result).await
    }

    async fn latest_fitment(&self, candidate_id: Uuid) -> Result<Option<FitmentScoreRow>> {
        Ok(sqlx::query_as::<_, FitmentScoreRow>(
            r#"
            SELECT * FROM fitment_scores
            WHERE candidate_id = $1
            ORDER BY calculated_at DESC
            LIMIT 1
            "#,
        )
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn create_assessment(&self, candidate_id: Uuid) -> Result<String> {
        let token = new_assessment_token();
        sqlx::query(
            "INSERT INTO assessments (id, candidate_id, token, status) VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::new_v4())
        .bind(candidate_id)
        .bind(&token)
        .bind(ASSESSMENT_PENDING)
        .execute(&self.pool)
        .await?;

        info!("Opened personality assessment for candidate {candidate_id}");
        Ok(token)
    }

    async fn finalize_assessment(
        &self,
        token: &str,
        completion: &AssessmentCompletion,
    ) -> Result<bool> {
        let traits = &completion.traits;
        let answers = serde_json::to_value(&completion.answers)?;
        let duration = completion
            .duration_seconds
            .map(|d| i32::try_from(d).unwrap_or(i32::MAX));

        // Dropping the transaction without commit rolls everything back.
        let mut tx = self.pool.begin().await?;

        // The status guard makes the token single-use even under concurrent submits.
        let candidate_id: Option<Uuid> = sqlx::query_scalar(
            r#"
            UPDATE assessments
               SET status = $1,
                   openness = $2,
                   conscientiousness = $3,
                   extraversion = $4,
                   agreeableness = $5,
                   neuroticism = $6,
                   answers = $7,
                   duration_seconds = $8,
                   completed_at = now()
             WHERE token = $9 AND status = $10
            RETURNING candidate_id
            "#,
        )
        .bind(ASSESSMENT_COMPLETED)
        .bind(traits.openness)
        .bind(traits.conscientiousness)
        .bind(traits.extraversion)
        .bind(traits.agreeableness)
        .bind(traits.neuroticism)
        .bind(&answers)
        .bind(duration)
        .bind(token)
        .bind(ASSESSMENT_PENDING)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(candidate_id) = candidate_id else {
            return Ok(false);
        };

        insert_fitment(&mut tx, candidate_id, &completion.fitment).await?;
        insert_retention(&mut tx, candidate_id, &completion.retention).await?;

        sqlx::query("UPDATE candidates SET status = $1, updated_at = now() WHERE id = $2")
            .bind(CANDIDATE_ASSESSED)
            .bind(candidate_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("Personality assessment completed for candidate {candidate_id}");
        Ok(true)
    }

    async fn latest_retention(&self, candidate_id: Uuid) -> Result<Option<RetentionScoreRow>> {
        Ok(sqlx::query_as::<_, RetentionScoreRow>(
            r#"
            SELECT * FROM retention_scores
            WHERE candidate_id = $1
            ORDER BY calculated_at DESC
            LIMIT 1
            "#,
        )
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn log_email(&self, entry: &EmailLogEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO email_logs
                (id, candidate_id, email_type, recipient_email, subject, status, error_message)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.candidate_id)
        .bind(entry.email_type)
        .bind(&entry.recipient)
        .bind(&entry.subject)
        .bind(entry.status())
        .bind(entry.error.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

async fn insert_fitment(
    conn: &mut PgConnection,
    candidate_id: Uuid,
    result: &FitmentResult,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let traits = &result.big5_trait_scores;
    sqlx::query(
        r#"
        INSERT INTO fitment_scores
            (id, candidate_id, category, raw_dataset_score, fitment_score, big5_score,
             overall_fitment_score, openness_score, conscientiousness_score,
             extraversion_score, agreeableness_score, neuroticism_score, provisional)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        "#,
    )
    .bind(id)
    .bind(candidate_id)
    .bind(result.category.as_str())
    .bind(result.raw_dataset_score)
    .bind(result.fitment_score)
    .bind(result.big5_score)
    .bind(result.overall_fitment_score)
    .bind(traits.openness)
    .bind(traits.conscientiousness)
    .bind(traits.extraversion)
    .bind(traits.agreeableness)
    .bind(traits.neuroticism)
    .bind(result.provisional)
    .execute(&mut *conn)
    .await?;

    info!(
        "Saved fitment {:.2} ({}) for candidate {candidate_id}",
        result.overall_fitment_score, result.category
    );
    Ok(id)
}

async fn insert_retention(
    conn: &mut PgConnection,
    candidate_id: Uuid,
    result: &RetentionResult,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let flags: Vec<String> = result.risk_flags.iter().map(|f| f.to_string()).collect();
    let c = &result.component_scores;
    sqlx::query(
        r#"
        INSERT INTO retention_scores
            (id, candidate_id, retention_score, retention_risk, stability, personality,
             engagement, fitment_factor, risk_flags, insights)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(id)
    .bind(candidate_id)
    .bind(result.retention_score)
    .bind(result.retention_risk.as_str())
    .bind(c.stability)
    .bind(c.personality)
    .bind(c.engagement)
    .bind(c.fitment_factor)
    .bind(&flags)
    .bind(&result.insights)
    .execute(&mut *conn)
    .await?;

    info!(
        "Saved retention {:.2} ({} risk) for candidate {candidate_id}",
        result.retention_score, result.retention_risk
    );
    Ok(id)
}
