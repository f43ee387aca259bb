mod assessment;
mod config;
mod db;
mod errors;
mod intake;
mod llm_client;
mod models;
mod notify;
mod routes;
mod scoring;
mod state;
mod store;
mod workflow;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::notify::smtp::SmtpNotifier;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgCandidateStore;
use crate::workflow::HiringWorkflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first; missing required variables abort startup.
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting candidate API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgCandidateStore::new(db));

    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized (bucket: {})", config.s3_bucket);

    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let notifier = Arc::new(SmtpNotifier::new(&config.smtp)?);

    let workflow = HiringWorkflow::new(store, notifier, config.assessment_base_url.clone());

    let state = AppState {
        s3,
        llm,
        config: config.clone(),
        workflow,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the candidate and recruiter UIs

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "candidate-api-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    // MinIO serves buckets by path, not virtual host.
    let s3_config = aws_sdk_s3::config::Builder::from(&s3_config)
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(s3_config)
}
