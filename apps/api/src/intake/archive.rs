use anyhow::{Context, Result};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::intake::text::ResumeFormat;

/// Object key for an uploaded resume: `resumes/<upload-id>/<filename>`.
/// Path components and unusual characters are stripped from the filename.
pub fn resume_key(upload_id: Uuid, filename: &str) -> String {
    let base = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();
    let safe: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let safe = if safe.trim_matches('.').is_empty() {
        "resume".to_string()
    } else {
        safe
    };
    format!("resumes/{upload_id}/{safe}")
}

/// Stores the original upload and returns its key.
pub async fn archive_resume(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    filename: &str,
    format: ResumeFormat,
    bytes: Bytes,
) -> Result<String> {
    let key = resume_key(Uuid::new_v4(), filename);
    s3.put_object()
        .bucket(bucket)
        .key(&key)
        .content_type(format.content_type())
        .body(ByteStream::from(bytes))
        .send()
        .await
        .with_context(|| format!("failed to upload resume to s3://{bucket}/{key}"))?;

    info!("Archived resume to s3://{bucket}/{key}");
    Ok(key)
}
