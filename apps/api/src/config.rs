use anyhow::{Context, Result};

/// SMTP credentials for candidate notifications. Delivery is disabled when
/// `EMAIL_ADDRESS` or `EMAIL_PASSWORD` is unset.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub server: String,
    pub port: u16,
    pub address: Option<String>,
    pub password: Option<String>,
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub anthropic_api_key: String,
    pub smtp: SmtpSettings,
    /// Questionnaire page; the token is appended as `?token=`.
    pub assessment_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            smtp: SmtpSettings {
                server: env_or("SMTP_SERVER", "smtp.gmail.com"),
                port: env_or("SMTP_PORT", "587")
                    .parse::<u16>()
                    .context("SMTP_PORT must be a valid port number")?,
                address: optional_env("EMAIL_ADDRESS"),
                password: optional_env("EMAIL_PASSWORD"),
            },
            assessment_base_url: env_or("ASSESSMENT_BASE_URL", "http://localhost:5173"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

/// Link the candidate follows to take the personality questionnaire.
pub fn assessment_link(base_url: &str, token: &str) -> String {
    format!("{}?token={token}", base_url.trim_end_matches('/'))
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
