use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::intake::archive::archive_resume;
use crate::intake::extraction::extract_profile;
use crate::intake::text::{extract_text, ResumeFormat};
use crate::intake::IntakeError;
use crate::models::candidate::CandidateProfile;
use crate::scoring::{compute_fitment, FitmentResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ParsedResume {
    /// Extracted profile for the candidate to review before submitting.
    pub profile: CandidateProfile,
    pub resume_key: String,
    /// Provisional score on the extracted signals, for display only.
    pub preview: FitmentResult,
}

/// POST /api/v1/resumes/parse
///
/// Multipart with a single `file` part (PDF or TXT).
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let (filename, bytes) = read_file_part(&mut multipart).await?;
    let format = ResumeFormat::from_filename(&filename)?;
    info!("Parsing resume '{filename}' ({} bytes)", bytes.len());

    let text = {
        let bytes = bytes.clone();
        let filename = filename.clone();
        tokio::task::spawn_blocking(move || extract_text(&bytes, &filename))
            .await
            .map_err(|e| AppError::Internal(e.into()))??
    };

    let profile = extract_profile(&state.llm, &text)
        .await
        .map_err(AppError::from)?;

    let resume_key = archive_resume(
        &state.s3,
        &state.config.s3_bucket,
        &filename,
        format,
        bytes,
    )
    .await
    .map_err(|e| AppError::S3(format!("{e:#}")))?;

    let preview = compute_fitment(&profile.signals, None);
    Ok(Json(ParsedResume {
        profile,
        resume_key,
        preview,
    }))
}

async fn read_file_part(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no filename".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(IntakeError::EmptyDocument.into());
        }
        return Ok((filename, bytes));
    }
    Err(AppError::Validation(
        "Missing multipart field 'file'".to_string(),
    ))
}
