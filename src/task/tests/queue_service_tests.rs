//! Service orchestration tests for task queue maintenance.

use std::sync::Arc;

use crate::sample::domain::SampleDomainError;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskUpdate},
    services::{NewTaskRequest, TaskQueueError, TaskQueueService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskQueueService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskQueueService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(DefaultClock))
}

fn bench_request(sample: &str) -> NewTaskRequest {
    NewTaskRequest::new(sample, "Bench A", "Bench B", TaskPriority::Normal)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_a_queued_task(service: TestService) {
    let created = service
        .create(bench_request("S1"))
        .await
        .expect("creation should succeed");

    assert_eq!(created.status(), TaskStatus::Queued);
    let fetched = service
        .find(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_sample_id(service: TestService) {
    let result = service
        .create(NewTaskRequest::new("  ", "Bench A", "Bench B", TaskPriority::Low))
        .await;

    assert!(matches!(
        result,
        Err(TaskQueueError::Input(SampleDomainError::EmptySampleId))
    ));
    let listed = service.list().await.expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_merges_priority_without_touching_status(service: TestService) {
    let created = service
        .create(bench_request("S1"))
        .await
        .expect("creation should succeed");

    let updated = service
        .update(
            created.id(),
            TaskUpdate::new().with_priority(TaskPriority::Urgent),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.priority(), TaskPriority::Urgent);
    assert_eq!(updated.status(), TaskStatus::Queued);
    assert!(updated.started_at().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_forbidden_status_transition(service: TestService) {
    let created = service
        .create(bench_request("S1"))
        .await
        .expect("creation should succeed");

    let result = service
        .update(
            created.id(),
            TaskUpdate::new().with_status(TaskStatus::Completed),
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskQueueError::Domain(
            TaskDomainError::InvalidStatusTransition { .. }
        ))
    ));
    let fetched = service
        .find(created.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.status(), TaskStatus::Queued);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_task_returns_not_found(service: TestService) {
    let phantom = TaskId::new();

    let result = service
        .update(phantom, TaskUpdate::new().with_priority(TaskPriority::Low))
        .await;

    assert!(matches!(
        result,
        Err(TaskQueueError::NotFound(id)) if id == phantom
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_tasks_in_queue_order(service: TestService) {
    let first = service
        .create(bench_request("S1"))
        .await
        .expect("creation should succeed");
    let second = service
        .create(bench_request("S2"))
        .await
        .expect("creation should succeed");

    let listed = service.list().await.expect("listing should succeed");

    let ids: Vec<TaskId> = listed.iter().map(crate::task::domain::Task::id).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_deletes_exactly_one_task(service: TestService) {
    let created = service
        .create(bench_request("S1"))
        .await
        .expect("creation should succeed");
    let survivor = service
        .create(bench_request("S2"))
        .await
        .expect("creation should succeed");

    assert!(service.remove(created.id()).await.expect("remove should succeed"));
    assert!(!service.remove(created.id()).await.expect("remove should succeed"));

    let listed = service.list().await.expect("listing should succeed");
    assert_eq!(listed, vec![survivor]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancel_queued_spares_in_flight_tasks(service: TestService) {
    let queued = service
        .create(bench_request("S1"))
        .await
        .expect("creation should succeed");
    let running = service
        .create(bench_request("S2"))
        .await
        .expect("creation should succeed");
    service
        .update(
            running.id(),
            TaskUpdate::new().with_status(TaskStatus::InProgress),
        )
        .await
        .expect("update should succeed");

    let cancelled = service
        .cancel_queued()
        .await
        .expect("cancellation should succeed");

    assert_eq!(cancelled, 1);
    let remaining = service.list().await.expect("listing should succeed");
    assert_eq!(remaining.len(), 1);
    let survivor = remaining.first().expect("task should remain");
    assert_eq!(survivor.id(), running.id());
    assert!(
        service
            .find(queued.id())
            .await
            .expect("lookup should succeed")
            .is_none()
    );
}
