//! Response bodies produced by the dashboard routes.
//!
//! Task, sample, execution, and robot-status bodies are the domain types
//! themselves; only the receipts with no domain counterpart live here.

use serde::{Deserialize, Serialize};

/// Body of a successful `DELETE /tasks/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionReceipt {
    /// Always `true`; a miss answers 404 instead.
    pub success: bool,
}

/// Body of a successful emergency stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyStopReport {
    /// Whether the halt reached the controller.
    pub success: bool,
    /// How many queued tasks were cancelled.
    pub cancelled_tasks: usize,
}
