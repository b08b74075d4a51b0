//! Repository port for the canonical task collection and its completion
//! watermark.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task store contract.
///
/// Implementations own the task collection and the completion watermark: the
/// timestamp of the most recent transition into a terminal status,
/// overwritten on every such transition and never cleared. Each operation is
/// individually atomic so a multi-threaded host never observes a partial
/// mutation.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (status, priority, timestamps)
    /// and refreshes the completion watermark when the task newly carries a
    /// completion timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist; nothing is mutated in that case.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task.
    ///
    /// Returns whether a task was actually removed. The watermark is left
    /// untouched.
    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks in insertion order.
    ///
    /// Insertion order is the queue order; any filtering or re-ordering is a
    /// caller concern.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the completion watermark, or `None` when no task has reached
    /// a terminal status yet.
    async fn last_completion(&self) -> TaskRepositoryResult<Option<DateTime<Utc>>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
