//! Request bodies accepted by the dashboard routes.

use crate::task::domain::{TaskPriority, TaskStatus, TaskUpdate};
use serde::Deserialize;

/// Body of `POST /tasks`.
///
/// Every field is required; a body missing any of them fails
/// deserialization and the route answers 400.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Sample the robot should move.
    pub sample_id: String,
    /// Location the sample currently occupies.
    pub source: String,
    /// Location the sample should end up in.
    pub destination: String,
    /// Advisory priority for the new task.
    pub priority: TaskPriority,
}

/// Body of `PATCH /tasks/{id}`; both fields optional, absent fields are
/// left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    /// Requested status change, if any.
    pub status: Option<TaskStatus>,
    /// Requested priority change, if any.
    pub priority: Option<TaskPriority>,
}

impl From<UpdateTaskBody> for TaskUpdate {
    fn from(body: UpdateTaskBody) -> Self {
        let mut update = Self::new();
        if let Some(status) = body.status {
            update = update.with_status(status);
        }
        if let Some(priority) = body.priority {
            update = update.with_priority(priority);
        }
        update
    }
}
