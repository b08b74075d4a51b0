//! Facade service behind the dashboard routes.

use crate::api::{
    ApiError, CreateTaskBody, DeletionReceipt, EmergencyStopReport, UpdateTaskBody,
};
use crate::robot::{
    domain::RobotStatusReport,
    ports::RobotCommander,
    services::RobotStatusService,
};
use crate::sample::{
    domain::Sample,
    ports::SampleRepository,
    services::SampleDirectoryService,
};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{
        ExecutionReport, NewTaskRequest, TaskExecutionError, TaskExecutionService, TaskQueueError,
        TaskQueueService,
    },
};
use mockable::Clock;
use std::sync::Arc;

const TASK_NOT_FOUND: &str = "Task not found";
const SAMPLE_NOT_FOUND: &str = "Sample not found";
const MISSING_FIELDS: &str = "Missing required fields";

/// One facade the external route glue calls; each method returns the exact
/// body of its route or an [`ApiError`] carrying status code and envelope.
#[derive(Clone)]
pub struct DashboardService<R, S, B, C>
where
    R: TaskRepository,
    S: SampleRepository,
    B: RobotCommander,
    C: Clock + Send + Sync,
{
    queue: TaskQueueService<R, C>,
    execution: TaskExecutionService<R, B, C>,
    status: RobotStatusService<R, C>,
    samples: SampleDirectoryService<S>,
    robot: Arc<B>,
}

impl<R, S, B, C> DashboardService<R, S, B, C>
where
    R: TaskRepository,
    S: SampleRepository,
    B: RobotCommander,
    C: Clock + Send + Sync,
{
    /// Wires the dashboard facade over shared port implementations.
    #[must_use]
    pub fn new(
        task_repository: Arc<R>,
        sample_repository: Arc<S>,
        robot: Arc<B>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            queue: TaskQueueService::new(task_repository.clone(), clock.clone()),
            execution: TaskExecutionService::new(
                task_repository.clone(),
                robot.clone(),
                clock.clone(),
            ),
            status: RobotStatusService::new(task_repository, clock),
            samples: SampleDirectoryService::new(sample_repository),
            robot,
        }
    }

    /// `GET /tasks`: every task in queue order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] when the store cannot be read.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.queue
            .list()
            .await
            .map_err(|err| ApiError::Internal(err.to_string()))
    }

    /// `POST /tasks`: queue a new move task (201 on success).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] when a required field is empty and
    /// [`ApiError::Internal`] on store failures.
    pub async fn create_task(&self, body: CreateTaskBody) -> Result<Task, ApiError> {
        let request = NewTaskRequest::new(
            body.sample_id,
            body.source,
            body.destination,
            body.priority,
        );
        self.queue.create(request).await.map_err(|err| match err {
            TaskQueueError::Input(_) => ApiError::InvalidInput(MISSING_FIELDS.to_owned()),
            other => ApiError::Internal(other.to_string()),
        })
    }

    /// `PATCH /tasks/{id}`: merge a partial update into a task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id,
    /// [`ApiError::InvalidInput`] for a forbidden status transition, and
    /// [`ApiError::Internal`] on store failures.
    pub async fn update_task(&self, id: TaskId, body: UpdateTaskBody) -> Result<Task, ApiError> {
        self.queue
            .update(id, body.into())
            .await
            .map_err(|err| match err {
                TaskQueueError::NotFound(_) => ApiError::NotFound(TASK_NOT_FOUND.to_owned()),
                TaskQueueError::Domain(domain) => ApiError::InvalidInput(domain.to_string()),
                other => ApiError::Internal(other.to_string()),
            })
    }

    /// `DELETE /tasks/{id}`: remove a task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when nothing was removed and
    /// [`ApiError::Internal`] on store failures.
    pub async fn delete_task(&self, id: TaskId) -> Result<DeletionReceipt, ApiError> {
        let removed = self
            .queue
            .remove(id)
            .await
            .map_err(|err| ApiError::Internal(err.to_string()))?;
        if !removed {
            return Err(ApiError::NotFound(TASK_NOT_FOUND.to_owned()));
        }
        Ok(DeletionReceipt { success: true })
    }

    /// `POST /tasks/{id}/execute`: drive a queued task through the robot.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id,
    /// [`ApiError::InvalidInput`] when the task is not queued, and
    /// [`ApiError::CommandFailure`] carrying the failed task when the robot
    /// command does not succeed.
    pub async fn execute_task(&self, id: TaskId) -> Result<ExecutionReport, ApiError> {
        self.execution.execute(id).await.map_err(|err| match err {
            TaskExecutionError::NotFound(_) => ApiError::NotFound(TASK_NOT_FOUND.to_owned()),
            TaskExecutionError::NotQueued { .. } => ApiError::InvalidInput(err.to_string()),
            TaskExecutionError::CommandFailed { reason, task } => ApiError::CommandFailure {
                error: reason,
                task,
            },
            other => ApiError::Internal(other.to_string()),
        })
    }

    /// `GET /robot/status`: connectivity plus the derived activity signal.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] when the store cannot be read.
    pub async fn robot_status(&self) -> Result<RobotStatusReport, ApiError> {
        self.status
            .report()
            .await
            .map_err(|err| ApiError::Internal(err.to_string()))
    }

    /// `GET /samples`: every tracked sample.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] when the directory cannot be read.
    pub async fn list_samples(&self) -> Result<Vec<Sample>, ApiError> {
        self.samples
            .list()
            .await
            .map_err(|err| ApiError::Internal(err.to_string()))
    }

    /// `GET /samples/{id}`: one sample by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no sample carries the identifier.
    pub async fn get_sample(&self, id: &str) -> Result<Sample, ApiError> {
        let found = self
            .samples
            .find(id)
            .await
            .map_err(|_| ApiError::NotFound(SAMPLE_NOT_FOUND.to_owned()))?;
        found.ok_or_else(|| ApiError::NotFound(SAMPLE_NOT_FOUND.to_owned()))
    }

    /// `POST /robot/emergency-stop`: halt the robot and cancel the queue.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] when the halt cannot be delivered or
    /// the queue cannot be cleared.
    pub async fn emergency_stop(&self) -> Result<EmergencyStopReport, ApiError> {
        self.robot
            .halt()
            .await
            .map_err(|err| ApiError::Internal(format!("Failed to halt robot: {err}")))?;
        let cancelled_tasks = self
            .queue
            .cancel_queued()
            .await
            .map_err(|err| ApiError::Internal(err.to_string()))?;
        Ok(EmergencyStopReport {
            success: true,
            cancelled_tasks,
        })
    }
}
