//! HTTP adapter speaking the robot controller's REST API.

use crate::robot::{
    domain::{MoveCommand, RobotResponse},
    ports::{RobotCommandError, RobotCommandResult, RobotCommander},
};
use async_trait::async_trait;
use serde::Deserialize;

/// Base URL used when [`ROBOT_SERVER_URL_ENV`] is unset.
pub const DEFAULT_ROBOT_SERVER_URL: &str = "http://localhost:8000";

/// Environment variable naming the robot controller's base URL.
pub const ROBOT_SERVER_URL_ENV: &str = "ROBOT_SERVER_URL";

const WALK_STRAIGHT_PATH: &str = "/api/robot/walk-straight";
const STOP_PATH: &str = "/api/robot/stop";

/// Error payload shape the controller uses for rejections.
#[derive(Debug, Deserialize)]
struct ControllerErrorBody {
    detail: String,
}

/// Robot commander backed by the controller's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpRobotCommander {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRobotCommander {
    /// Creates a commander for the controller at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a commander from [`ROBOT_SERVER_URL_ENV`], falling back to
    /// [`DEFAULT_ROBOT_SERVER_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(ROBOT_SERVER_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_ROBOT_SERVER_URL.to_owned());
        Self::new(base_url)
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Extracts the controller's failure detail from a non-success response.
    async fn rejection(response: reqwest::Response) -> RobotCommandError {
        let status = response.status();
        let detail = match response.json::<ControllerErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => format!("robot controller returned status {status}"),
        };
        RobotCommandError::Rejected { detail }
    }
}

#[async_trait]
impl RobotCommander for HttpRobotCommander {
    async fn send_move(&self, command: &MoveCommand) -> RobotCommandResult<RobotResponse> {
        let response = self
            .client
            .post(self.endpoint(WALK_STRAIGHT_PATH))
            .json(command)
            .send()
            .await
            .map_err(RobotCommandError::transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let payload = response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| RobotCommandError::MalformedResponse(err.to_string()))?;
        Ok(RobotResponse::new(payload))
    }

    async fn halt(&self) -> RobotCommandResult<()> {
        let response = self
            .client
            .post(self.endpoint(STOP_PATH))
            .send()
            .await
            .map_err(RobotCommandError::transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}
