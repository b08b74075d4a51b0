//! Service assembling the robot status snapshot for polling clients.

use crate::robot::domain::{RobotConnectionStatus, RobotStatusReport, derive_activity};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for robot status reporting.
#[derive(Debug, Error)]
pub enum RobotStatusError {
    /// Task store lookup failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for robot status operations.
pub type RobotStatusResult<T> = Result<T, RobotStatusError>;

/// Robot status reporting service.
///
/// Reads the task store and the completion watermark once per report; the
/// derived activity has no state of its own.
#[derive(Clone)]
pub struct RobotStatusService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    connection: RobotConnectionStatus,
}

impl<R, C> RobotStatusService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a status service reporting a connected controller.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            connection: RobotConnectionStatus::Connected,
        }
    }

    /// Sets the connectivity the service reports.
    #[must_use]
    pub const fn with_connection(mut self, connection: RobotConnectionStatus) -> Self {
        self.connection = connection;
        self
    }

    /// Builds the current status snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RobotStatusError::Repository`] when the task store cannot
    /// be read.
    pub async fn report(&self) -> RobotStatusResult<RobotStatusReport> {
        let now = self.clock.utc();

        let current_activity = match self.connection {
            RobotConnectionStatus::Connected => {
                let tasks = self.repository.list_all().await?;
                let watermark = self.repository.last_completion().await?;
                Some(derive_activity(&tasks, watermark, now))
            }
            RobotConnectionStatus::Disconnected => None,
        };

        Ok(RobotStatusReport {
            connection_status: self.connection,
            current_activity,
            last_updated: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::domain::ACTIVITY_AWAITING;
    use crate::sample::domain::{SampleId, StorageLocation};
    use crate::task::adapters::memory::InMemoryTaskRepository;
    use crate::task::domain::{Task, TaskPriority, TaskStatus, TaskUpdate};
    use mockable::DefaultClock;
    use rstest::rstest;

    type TestService = RobotStatusService<InMemoryTaskRepository, DefaultClock>;

    fn build_service() -> (Arc<InMemoryTaskRepository>, TestService) {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let service = RobotStatusService::new(repository.clone(), Arc::new(DefaultClock));
        (repository, service)
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn empty_store_reports_idle_activity() {
        let (_, service) = build_service();

        let report = service.report().await.expect("report should succeed");

        assert_eq!(
            report.connection_status,
            RobotConnectionStatus::Connected
        );
        assert_eq!(report.current_activity.as_deref(), Some(ACTIVITY_AWAITING));
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn in_progress_task_shows_in_report() {
        let (repository, service) = build_service();
        let mut task = Task::new_move(
            SampleId::new("PCR-2025-001").expect("valid sample id"),
            StorageLocation::new("Bench A").expect("valid source"),
            StorageLocation::new("Bench B").expect("valid destination"),
            TaskPriority::Normal,
            &DefaultClock,
        );
        repository.store(&task).await.expect("store should succeed");
        task.apply_update(
            &TaskUpdate::new().with_status(TaskStatus::InProgress),
            &DefaultClock,
        )
        .expect("transition should succeed");
        repository
            .update(&task)
            .await
            .expect("update should succeed");

        let report = service.report().await.expect("report should succeed");

        assert_eq!(
            report.current_activity.as_deref(),
            Some("Moving sample PCR-2025-001 from Bench A to Bench B")
        );
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn disconnected_controller_reports_no_activity() {
        let (_, service) = build_service();
        let disconnected = service.with_connection(RobotConnectionStatus::Disconnected);

        let report = disconnected
            .report()
            .await
            .expect("report should succeed");

        assert_eq!(
            report.connection_status,
            RobotConnectionStatus::Disconnected
        );
        assert!(report.current_activity.is_none());
    }
}
