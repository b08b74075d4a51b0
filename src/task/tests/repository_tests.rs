//! Tests for the in-memory task repository and its completion watermark.

use crate::sample::domain::{SampleId, StorageLocation};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId, TaskPriority, TaskStatus, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn task_for(sample: &str) -> Task {
    Task::new_move(
        SampleId::new(sample).expect("valid sample id"),
        StorageLocation::new("Bench A").expect("valid source"),
        StorageLocation::new("Bench B").expect("valid destination"),
        TaskPriority::Normal,
        &DefaultClock,
    )
}

async fn drive_to(repository: &InMemoryTaskRepository, task: &mut Task, terminal: TaskStatus) {
    task.apply_update(
        &TaskUpdate::new().with_status(TaskStatus::InProgress),
        &DefaultClock,
    )
    .expect("start should succeed");
    repository
        .update(task)
        .await
        .expect("update should succeed");
    task.apply_update(&TaskUpdate::new().with_status(terminal), &DefaultClock)
        .expect("finish should succeed");
    repository
        .update(task)
        .await
        .expect("update should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_and_find_round_trips(repository: InMemoryTaskRepository) {
    let task = task_for("S1");

    repository.store(&task).await.expect("store should succeed");
    let fetched = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(task));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_identifier(repository: InMemoryTaskRepository) {
    let task = task_for("S1");
    repository.store(&task).await.expect("store should succeed");

    let result = repository.store(&task).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_preserves_insertion_order(repository: InMemoryTaskRepository) {
    let first = task_for("S1");
    let second = task_for("S2");
    let third = task_for("S3");
    for task in [&first, &second, &third] {
        repository.store(task).await.expect("store should succeed");
    }

    repository
        .remove(second.id())
        .await
        .expect("remove should succeed");
    let listed = repository.list_all().await.expect("list should succeed");

    let ids: Vec<TaskId> = listed.iter().map(Task::id).collect();
    assert_eq!(ids, vec![first.id(), third.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_task_mutates_nothing(repository: InMemoryTaskRepository) {
    let stored = task_for("S1");
    repository
        .store(&stored)
        .await
        .expect("store should succeed");
    let phantom = task_for("S2");

    let result = repository.update(&phantom).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == phantom.id()
    ));
    let listed = repository.list_all().await.expect("list should succeed");
    assert_eq!(listed, vec![stored]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_reports_whether_a_task_was_removed(repository: InMemoryTaskRepository) {
    let task = task_for("S1");
    repository.store(&task).await.expect("store should succeed");

    assert!(
        repository
            .remove(task.id())
            .await
            .expect("remove should succeed")
    );
    assert!(
        !repository
            .remove(task.id())
            .await
            .expect("remove should succeed")
    );
    let listed = repository.list_all().await.expect("list should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn watermark_starts_absent(repository: InMemoryTaskRepository) {
    let watermark = repository
        .last_completion()
        .await
        .expect("read should succeed");

    assert!(watermark.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn watermark_tracks_the_latest_terminal_transition(repository: InMemoryTaskRepository) {
    let mut first = task_for("S1");
    let mut second = task_for("S2");
    for task in [&first, &second] {
        repository.store(task).await.expect("store should succeed");
    }

    drive_to(&repository, &mut first, TaskStatus::Completed).await;
    let after_first = repository
        .last_completion()
        .await
        .expect("read should succeed");
    assert_eq!(after_first, first.completed_at());

    drive_to(&repository, &mut second, TaskStatus::Failed).await;
    let after_second = repository
        .last_completion()
        .await
        .expect("read should succeed");
    assert_eq!(after_second, second.completed_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn priority_update_leaves_watermark_untouched(repository: InMemoryTaskRepository) {
    let mut task = task_for("S1");
    repository.store(&task).await.expect("store should succeed");

    task.apply_update(
        &TaskUpdate::new().with_priority(TaskPriority::Urgent),
        &DefaultClock,
    )
    .expect("update should succeed");
    repository
        .update(&task)
        .await
        .expect("update should succeed");

    let watermark = repository
        .last_completion()
        .await
        .expect("read should succeed");
    assert!(watermark.is_none());
}
