use aws_sdk_s3::Client as S3Client;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::workflow::HiringWorkflow;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub llm: LlmClient,
    pub config: Config,
    /// Owns the record store and the notifier behind trait objects.
    pub workflow: HiringWorkflow,
}
