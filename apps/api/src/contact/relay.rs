//! Outbound relay to the hosted form-submission endpoint.
//!
//! One POST per submission. No retries, no backoff: a failed call is reported
//! back to the controller and the user decides whether to try again.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Body posted to the relay: the four fields plus the fixed access key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub access_key: String,
}

#[derive(Debug, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Relay response could not be decoded: {0}")]
    Decode(String),

    #[error("Relay rejected the submission: {message}")]
    Rejected { message: String },
}

/// Diagnostic split of relay failures. Both map to the same user-facing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    Rejected,
}

impl RelayError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RelayError::Transport(_) | RelayError::Decode(_) => FailureKind::Transport,
            RelayError::Rejected { .. } => FailureKind::Rejected,
        }
    }
}

/// Delivers a submission somewhere. Implement this to swap the external
/// endpoint (or stub it in tests) without touching the controller.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn send(&self, submission: &Submission) -> Result<(), RelayError>;
}

/// Relay backed by the Web3Forms-compatible JSON endpoint.
#[derive(Clone)]
pub struct Web3FormsRelay {
    client: Client,
    endpoint: String,
}

impl Web3FormsRelay {
    /// `timeout: None` leaves the request unbounded.
    pub fn new(endpoint: String, timeout: Option<Duration>) -> Result<Self, RelayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }
}

#[async_trait]
impl FormRelay for Web3FormsRelay {
    async fn send(&self, submission: &Submission) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Relay answered {} ({} bytes)", status, body.len());

        // The endpoint reports the outcome in the body, whatever the status code.
        interpret_response(&body)
    }
}

fn interpret_response(body: &str) -> Result<(), RelayError> {
    let parsed: RelayResponse =
        serde_json::from_str(body).map_err(|e| RelayError::Decode(e.to_string()))?;
    if parsed.success {
        Ok(())
    } else {
        Err(RelayError::Rejected {
            message: parsed
                .message
                .unwrap_or_else(|| "no message provided".to_string()),
        })
    }
}
