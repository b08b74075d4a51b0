//! Robot status snapshot served to polling clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connectivity of the robot controller as the dashboard sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotConnectionStatus {
    /// The controller is reachable.
    Connected,
    /// The controller is unreachable; no activity can be reported.
    Disconnected,
}

impl RobotConnectionStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }
}

impl fmt::Display for RobotConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot returned by the robot status endpoint.
///
/// `current_activity` is `null` on the wire while the controller is
/// disconnected; otherwise it carries the derived activity string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotStatusReport {
    /// Controller connectivity.
    pub connection_status: RobotConnectionStatus,
    /// Derived activity string, absent while disconnected.
    pub current_activity: Option<String>,
    /// When this snapshot was taken.
    pub last_updated: DateTime<Utc>,
}
