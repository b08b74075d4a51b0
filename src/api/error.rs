//! API-level error taxonomy and the JSON error envelopes.

use crate::task::domain::Task;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to the dashboard routes.
///
/// Each variant maps to one HTTP status code and one JSON body shape;
/// `NotFound` and `InvalidInput` never follow a state mutation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The referenced task or sample does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// The request carried missing or malformed fields (400).
    #[error("{0}")]
    InvalidInput(String),

    /// The robot command failed and the task was marked failed (500).
    #[error("{error}")]
    CommandFailure {
        /// Failure reason for the client.
        error: String,
        /// The task in its failed state.
        task: Box<Task>,
    },

    /// Unexpected internal failure (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::InvalidInput(_) => 400,
            Self::CommandFailure { .. } | Self::Internal(_) => 500,
        }
    }

    /// Returns the JSON body this error maps to.
    ///
    /// Execution failures carry the failed task next to the reason so the
    /// client can render it without another lookup; everything else is a
    /// plain `{error}` envelope.
    #[must_use]
    pub fn body(&self) -> serde_json::Value {
        match self {
            Self::CommandFailure { error, task } => json!({ "error": error, "task": task }),
            other => json!({ "error": other.to_string() }),
        }
    }
}
