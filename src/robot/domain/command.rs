//! Command payloads exchanged with the robot controller.

use serde::{Deserialize, Serialize};

/// Straight-line movement instruction for the robot controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveCommand {
    /// Distance to travel in metres; positive is forward.
    pub distance: f64,
    /// Walking speed in the controller's normalized `0.0..=1.0` range.
    pub speed: f64,
}

impl MoveCommand {
    /// Distance used for every bench-to-bench transfer.
    pub const BENCH_TRANSFER_DISTANCE_M: f64 = 1.0;

    /// Moderate speed used for every bench-to-bench transfer.
    pub const BENCH_TRANSFER_SPEED: f64 = 0.3;

    /// Creates a movement command.
    #[must_use]
    pub const fn new(distance: f64, speed: f64) -> Self {
        Self { distance, speed }
    }

    /// Returns the fixed payload dispatched for sample transfers.
    #[must_use]
    pub const fn bench_transfer() -> Self {
        Self::new(Self::BENCH_TRANSFER_DISTANCE_M, Self::BENCH_TRANSFER_SPEED)
    }
}

/// Opaque success payload returned by the robot controller.
///
/// The core never inspects the payload; it is passed through to clients
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobotResponse(serde_json::Value);

impl RobotResponse {
    /// Wraps a controller payload.
    #[must_use]
    pub const fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    /// Returns the wrapped payload.
    #[must_use]
    pub const fn payload(&self) -> &serde_json::Value {
        &self.0
    }

    /// Unwraps the controller payload.
    #[must_use]
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}
