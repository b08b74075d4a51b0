//! Orchestration of a single task's execution against the robot controller.

use crate::robot::{
    domain::{MoveCommand, RobotResponse},
    ports::RobotCommander,
};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskStatus, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Outcome of a successful execution: the completed task plus the
/// controller's payload, so the caller needs no second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    /// The task in its completed state.
    pub task: Task,
    /// Payload the controller returned for the move command.
    pub robot_response: RobotResponse,
}

/// Service-level errors for task execution.
#[derive(Debug, Error)]
pub enum TaskExecutionError {
    /// No task exists with the given identifier; nothing was mutated.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The task is not waiting in the queue.
    #[error("task {task_id} is not queued for execution (status: {status})")]
    NotQueued {
        /// Identifier of the task addressed.
        task_id: TaskId,
        /// Status the task currently holds.
        status: TaskStatus,
    },

    /// Domain state-machine rules rejected a transition.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// The robot command failed; the task has been marked failed.
    #[error("robot command failed: {reason}")]
    CommandFailed {
        /// Why the command failed, as reported by the commander.
        reason: String,
        /// The task in its failed state, for rendering without a lookup.
        task: Box<Task>,
    },
}

/// Task execution orchestration service.
///
/// Drives one queued task to a terminal status around a single robot
/// command. The in-progress write is persisted before the command is sent,
/// so concurrent readers observe the task as executing for the whole
/// duration of the remote operation. The command itself is at-most-once: a
/// failure marks the task failed, never retries. A crash between the two
/// writes leaves the task in progress with no automatic recovery.
#[derive(Clone)]
pub struct TaskExecutionService<R, B, C>
where
    R: TaskRepository,
    B: RobotCommander,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    robot: Arc<B>,
    clock: Arc<C>,
}

impl<R, B, C> TaskExecutionService<R, B, C>
where
    R: TaskRepository,
    B: RobotCommander,
    C: Clock + Send + Sync,
{
    /// Creates a new execution service.
    #[must_use]
    pub const fn new(repository: Arc<R>, robot: Arc<B>, clock: Arc<C>) -> Self {
        Self {
            repository,
            robot,
            clock,
        }
    }

    /// Executes a queued task end to end.
    ///
    /// # Errors
    ///
    /// Returns [`TaskExecutionError::NotFound`] for an unknown ID,
    /// [`TaskExecutionError::NotQueued`] when the task is not waiting in the
    /// queue, and [`TaskExecutionError::CommandFailed`] carrying the failed
    /// task when the robot command does not succeed.
    pub async fn execute(&self, id: TaskId) -> Result<ExecutionReport, TaskExecutionError> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskExecutionError::NotFound(id))?;

        if task.status() != TaskStatus::Queued {
            return Err(TaskExecutionError::NotQueued {
                task_id: id,
                status: task.status(),
            });
        }

        task.apply_update(
            &TaskUpdate::new().with_status(TaskStatus::InProgress),
            &*self.clock,
        )?;
        self.repository.update(&task).await?;
        tracing::info!(task_id = %id, sample_id = %task.sample_id(), "executing task");

        match self.robot.send_move(&MoveCommand::bench_transfer()).await {
            Ok(robot_response) => {
                task.apply_update(
                    &TaskUpdate::new().with_status(TaskStatus::Completed),
                    &*self.clock,
                )?;
                self.repository.update(&task).await?;
                tracing::info!(task_id = %id, "task completed");
                Ok(ExecutionReport {
                    task,
                    robot_response,
                })
            }
            Err(err) => {
                task.apply_update(
                    &TaskUpdate::new().with_status(TaskStatus::Failed),
                    &*self.clock,
                )?;
                self.repository.update(&task).await?;
                tracing::warn!(task_id = %id, error = %err, "task failed");
                Err(TaskExecutionError::CommandFailed {
                    reason: err.to_string(),
                    task: Box::new(task),
                })
            }
        }
    }
}
