//! Task aggregate root and the merge semantics for client-driven updates.

use super::{EstimatedDuration, TaskDomainError, TaskId, TaskPriority, TaskStatus};
use crate::sample::domain::{SampleId, StorageLocation};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Kind of physical work a task asks the robot to perform.
///
/// The status/timestamp envelope lives on [`Task`], so new kinds add
/// variants here without touching the state-machine logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    /// Relocate a sample from one storage location to another.
    Move {
        /// Location the sample currently occupies.
        source: StorageLocation,
        /// Location the sample should end up in.
        destination: StorageLocation,
    },
}

/// Task aggregate root: one unit of queued robot work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    sample_id: SampleId,
    #[serde(flatten)]
    kind: TaskKind,
    status: TaskStatus,
    priority: TaskPriority,
    estimated_duration: EstimatedDuration,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a queued move task with a fresh identifier and a randomized
    /// duration estimate.
    #[must_use]
    pub fn new_move(
        sample_id: SampleId,
        source: StorageLocation,
        destination: StorageLocation,
        priority: TaskPriority,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            sample_id,
            kind: TaskKind::Move {
                source,
                destination,
            },
            status: TaskStatus::Queued,
            priority,
            estimated_duration: EstimatedDuration::randomized(),
            created_at: clock.utc(),
            started_at: None,
            completed_at: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the identifier of the sample being moved.
    #[must_use]
    pub const fn sample_id(&self) -> &SampleId {
        &self.sample_id
    }

    /// Returns the kind of work requested.
    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the advisory priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the display-only duration estimate.
    #[must_use]
    pub const fn estimated_duration(&self) -> EstimatedDuration {
        self.estimated_duration
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when execution first began, if it has.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns when the task first reached a terminal status, if it has.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Merges a partial update into the task.
    ///
    /// Fields absent from the update are left unchanged. Entering
    /// `InProgress` stamps `started_at` once; entering a terminal status
    /// stamps `completed_at` once; repeating a status never re-stamps.
    /// Updates addressed to a terminal task leave the entity unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the update
    /// requests a status change the state machine forbids from a
    /// non-terminal status.
    pub fn apply_update(
        &mut self,
        update: &TaskUpdate,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if self.status.is_terminal() {
            return Ok(());
        }

        if let Some(next) = update.status
            && next != self.status
        {
            if !self.status.can_transition_to(next) {
                return Err(TaskDomainError::InvalidStatusTransition {
                    task_id: self.id,
                    from: self.status,
                    to: next,
                });
            }
            self.status = next;
            self.stamp_transition(next, clock);
        }

        if let Some(priority) = update.priority {
            self.priority = priority;
        }

        Ok(())
    }

    /// Sets the timestamp a status transition triggers, if not already set.
    fn stamp_transition(&mut self, entered: TaskStatus, clock: &impl Clock) {
        match entered {
            TaskStatus::InProgress => {
                if self.started_at.is_none() {
                    self.started_at = Some(clock.utc());
                }
            }
            TaskStatus::Completed | TaskStatus::Failed => {
                if self.completed_at.is_none() {
                    self.completed_at = Some(clock.utc());
                }
            }
            TaskStatus::Queued => {}
        }
    }
}

/// Partial task update merged by [`Task::apply_update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

impl TaskUpdate {
    /// Creates an empty update.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            priority: None,
        }
    }

    /// Requests a status change.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Requests a priority change.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the requested status change, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the requested priority change, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }
}
