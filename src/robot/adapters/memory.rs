//! In-memory robot commander for tests and offline operation.

use crate::robot::{
    domain::{MoveCommand, RobotResponse},
    ports::{RobotCommandError, RobotCommandResult, RobotCommander},
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, RwLock};

/// In-memory robot commander.
///
/// Models the controller without any network dependency: commands succeed
/// with a synthetic payload until a failure is scripted, and every received
/// command is recorded for inspection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRobotCommander {
    state: Arc<RwLock<InMemoryCommanderState>>,
}

#[derive(Debug, Default)]
struct InMemoryCommanderState {
    failure_detail: Option<String>,
    response_override: Option<serde_json::Value>,
    sent_commands: Vec<MoveCommand>,
    halt_count: u32,
}

impl InMemoryRobotCommander {
    /// Creates a commander that accepts every command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts every subsequent command to fail with the given detail.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn set_failure(&self, detail: impl Into<String>) -> RobotCommandResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RobotCommandError::transport(std::io::Error::other(err.to_string())))?;
        state.failure_detail = Some(detail.into());
        Ok(())
    }

    /// Overrides the payload returned for successful commands.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn set_response(&self, payload: serde_json::Value) -> RobotCommandResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RobotCommandError::transport(std::io::Error::other(err.to_string())))?;
        state.response_override = Some(payload);
        Ok(())
    }

    /// Returns every move command received so far, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn sent_commands(&self) -> RobotCommandResult<Vec<MoveCommand>> {
        let state = self
            .state
            .read()
            .map_err(|err| RobotCommandError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.sent_commands.clone())
    }

    /// Returns how many halt commands were received.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn halt_count(&self) -> RobotCommandResult<u32> {
        let state = self
            .state
            .read()
            .map_err(|err| RobotCommandError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.halt_count)
    }
}

#[async_trait]
impl RobotCommander for InMemoryRobotCommander {
    async fn send_move(&self, command: &MoveCommand) -> RobotCommandResult<RobotResponse> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RobotCommandError::transport(std::io::Error::other(err.to_string())))?;
        state.sent_commands.push(*command);

        if let Some(detail) = &state.failure_detail {
            return Err(RobotCommandError::Rejected {
                detail: detail.clone(),
            });
        }

        let payload = state.response_override.clone().unwrap_or_else(|| {
            json!({
                "status": "success",
                "message": format!(
                    "robot walked {}m at speed {}",
                    command.distance, command.speed
                ),
            })
        });
        Ok(RobotResponse::new(payload))
    }

    async fn halt(&self) -> RobotCommandResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RobotCommandError::transport(std::io::Error::other(err.to_string())))?;
        state.halt_count += 1;

        if let Some(detail) = &state.failure_detail {
            return Err(RobotCommandError::Rejected {
                detail: detail.clone(),
            });
        }
        Ok(())
    }
}
