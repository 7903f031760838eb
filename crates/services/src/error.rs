//! Shared error types for the services crate.

use thiserror::Error;

use interview_core::model::SessionError;

/// Errors emitted by the chat completion client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatError {
    #[error("interview assistant is not configured")]
    Disabled,
    #[error("interview assistant returned an empty response")]
    EmptyResponse,
    #[error("interview assistant request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the interview loop.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InterviewError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Chat(#[from] ChatError),
}

/// Errors emitted by the PDF summary exporter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("interview is not completed yet")]
    Incomplete,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Pdf(#[from] printpdf::Error),
}
