//! Command port for the external robot controller.

use crate::robot::domain::{MoveCommand, RobotResponse};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for robot command operations.
pub type RobotCommandResult<T> = Result<T, RobotCommandError>;

/// Remote command contract for the robot controller.
///
/// The orchestrator treats every command as at-most-once: a failed command
/// is never retried here, the owning task is marked failed instead.
#[async_trait]
pub trait RobotCommander: Send + Sync {
    /// Sends a straight-line move command and awaits the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`RobotCommandError`] when the controller rejects the
    /// command, the transport fails, or the response cannot be decoded.
    async fn send_move(&self, command: &MoveCommand) -> RobotCommandResult<RobotResponse>;

    /// Halts all robot motion immediately.
    ///
    /// # Errors
    ///
    /// Returns [`RobotCommandError`] when the halt cannot be delivered or
    /// the controller rejects it.
    async fn halt(&self) -> RobotCommandResult<()>;
}

/// Errors returned by robot commander adapters.
#[derive(Debug, Clone, Error)]
pub enum RobotCommandError {
    /// The controller answered with an error payload.
    #[error("robot rejected the command: {detail}")]
    Rejected {
        /// Detail text from the controller's error payload.
        detail: String,
    },

    /// The controller could not be reached.
    #[error("robot transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The controller answered with a payload the core cannot decode.
    #[error("malformed robot response: {0}")]
    MalformedResponse(String),
}

impl RobotCommandError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
