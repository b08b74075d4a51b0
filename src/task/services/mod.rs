//! Orchestration services for the task lifecycle.

mod execution;
mod queue;

pub use execution::{ExecutionReport, TaskExecutionError, TaskExecutionService};
pub use queue::{NewTaskRequest, TaskQueueError, TaskQueueResult, TaskQueueService};
