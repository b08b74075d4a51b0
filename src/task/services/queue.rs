//! Service layer for task creation, merge-updates, and queue maintenance.

use crate::sample::domain::{SampleDomainError, SampleId, StorageLocation};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for queueing a new move task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    sample_id: String,
    source: String,
    destination: String,
    priority: TaskPriority,
}

impl NewTaskRequest {
    /// Creates a request from raw client input.
    #[must_use]
    pub fn new(
        sample_id: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        priority: TaskPriority,
    ) -> Self {
        Self {
            sample_id: sample_id.into(),
            source: source.into(),
            destination: destination.into(),
            priority,
        }
    }
}

/// Service-level errors for task queue operations.
#[derive(Debug, Error)]
pub enum TaskQueueError {
    /// Request input failed validation.
    #[error(transparent)]
    Input(#[from] SampleDomainError),
    /// Domain state-machine rules rejected the mutation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
}

/// Result type for task queue service operations.
pub type TaskQueueResult<T> = Result<T, TaskQueueError>;

/// Task queue maintenance service.
#[derive(Clone)]
pub struct TaskQueueService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskQueueService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task queue service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Queues a new move task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueueError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create(&self, request: NewTaskRequest) -> TaskQueueResult<Task> {
        let sample_id = SampleId::new(request.sample_id)?;
        let source = StorageLocation::new(request.source)?;
        let destination = StorageLocation::new(request.destination)?;

        let task = Task::new_move(sample_id, source, destination, request.priority, &*self.clock);
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), sample_id = %task.sample_id(), "task queued");
        Ok(task)
    }

    /// Merges a partial update into an existing task.
    ///
    /// Updates addressed to a terminal task return the unchanged entity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueueError::NotFound`] when no task has the given ID,
    /// domain errors for forbidden status transitions, and repository
    /// errors from persistence.
    pub async fn update(&self, id: TaskId, update: TaskUpdate) -> TaskQueueResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskQueueError::NotFound(id))?;

        task.apply_update(&update, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Removes a task, returning whether one was actually removed.
    ///
    /// # Errors
    ///
    /// Returns repository errors from persistence.
    pub async fn remove(&self, id: TaskId) -> TaskQueueResult<bool> {
        let removed = self.repository.remove(id).await?;
        if removed {
            tracing::info!(task_id = %id, "task removed");
        }
        Ok(removed)
    }

    /// Returns all tasks in queue (insertion) order.
    ///
    /// # Errors
    ///
    /// Returns repository errors from persistence.
    pub async fn list(&self) -> TaskQueueResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the given ID.
    ///
    /// # Errors
    ///
    /// Returns repository errors from persistence.
    pub async fn find(&self, id: TaskId) -> TaskQueueResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Removes every queued task, returning how many were cancelled.
    ///
    /// In-flight and terminal tasks are untouched; this backs the
    /// dashboard's emergency stop.
    ///
    /// # Errors
    ///
    /// Returns repository errors from persistence.
    pub async fn cancel_queued(&self) -> TaskQueueResult<usize> {
        let queued: Vec<TaskId> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(|task| task.status() == TaskStatus::Queued)
            .map(|task| task.id())
            .collect();

        let mut cancelled = 0;
        for id in queued {
            if self.repository.remove(id).await? {
                cancelled += 1;
            }
        }
        if cancelled > 0 {
            tracing::info!(cancelled, "queued tasks cancelled");
        }
        Ok(cancelled)
    }
}
