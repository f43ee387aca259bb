//! Resume intake: file to text, text to a structured candidate profile.

pub mod archive;
pub mod extraction;
pub mod handlers;
pub mod prompts;
pub mod text;

use thiserror::Error;

use crate::llm_client::LlmError;
use crate::models::candidate::SignalError;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("unsupported file format '{0}'; upload a PDF or TXT resume")]
    UnsupportedFormat(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("text resume is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("no text could be extracted from the resume")]
    EmptyDocument,

    #[error("extraction service failed: {0}")]
    Llm(#[from] LlmError),

    #[error("extracted profile is malformed: {0}")]
    Malformed(String),

    #[error(transparent)]
    Signals(#[from] SignalError),
}
