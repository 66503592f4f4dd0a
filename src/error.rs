//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
///
/// Every failed call ends in exactly one of these. Transport failures and
/// business rejections both carry a diagnostic message meant for logs, not
/// for end users.
#[derive(Error, Debug)]
pub enum SdkError {
    /// The request never produced a readable response.
    #[error("Error: {0}")]
    Http(#[from] HttpError),

    /// The response decoded, but its `ok` flag was missing or false.
    #[error("Failure response {body}")]
    Rejected { body: String },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// True when the server answered but refused the request.
    pub fn is_rejected(&self) -> bool {
        matches!(self, SdkError::Rejected { .. })
    }
}

/// HTTP-layer errors, surfaced verbatim and never retried.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}
