use thiserror::Error;

use crate::submitter::{GENERIC_ERROR, TRANSPORT_ERROR};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The activities could not be fetched or decoded.
#[derive(Debug, Error)]
#[error("failed to load activities: {0}")]
pub struct LoadFailure(#[from] pub ApiError);

#[derive(Debug, Error)]
pub enum SubmitFailure {
    /// The server answered with a non-success status.
    #[error("signup rejected with status {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
    /// No usable answer came back.
    #[error("signup request failed: {0}")]
    Transport(#[from] ApiError),
}

impl SubmitFailure {
    /// Text for the message banner.
    pub fn user_message(&self) -> &str {
        match self {
            SubmitFailure::Rejected {
                detail: Some(detail),
                ..
            } => detail,
            SubmitFailure::Rejected { detail: None, .. } => GENERIC_ERROR,
            SubmitFailure::Transport(_) => TRANSPORT_ERROR,
        }
    }
}
