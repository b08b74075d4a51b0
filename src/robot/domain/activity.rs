//! Derivation of the human-readable activity signal for polling clients.

use crate::task::domain::{Task, TaskKind, TaskStatus};
use chrono::{DateTime, Utc};

/// How long after a terminal transition the completion message keeps
/// showing, in milliseconds. The comparison is strict: an elapsed time of
/// exactly this value already reads as idle.
pub const RECENT_COMPLETION_WINDOW_MS: i64 = 3000;

/// Message shown while the completion watermark is fresh.
pub const ACTIVITY_TASK_COMPLETE: &str = "Task complete";

/// Message shown when the robot has nothing to report.
pub const ACTIVITY_AWAITING: &str = "Awaiting next task";

/// Derives the current activity string from the task list and the
/// completion watermark.
///
/// Priority order: an in-progress task (first in list order) beats a recent
/// completion, which beats the idle message. The watermark is the only
/// memory of a finished task; it decays purely by comparison against `now`,
/// never by an explicit timer.
#[must_use]
pub fn derive_activity(
    tasks: &[Task],
    last_completion: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> String {
    if let Some(active) = tasks
        .iter()
        .find(|task| task.status() == TaskStatus::InProgress)
    {
        match active.kind() {
            TaskKind::Move {
                source,
                destination,
            } => {
                return format!(
                    "Moving sample {} from {source} to {destination}",
                    active.sample_id()
                );
            }
        }
    }

    if let Some(mark) = last_completion
        && now.signed_duration_since(mark).num_milliseconds() < RECENT_COMPLETION_WINDOW_MS
    {
        return ACTIVITY_TASK_COMPLETE.to_owned();
    }

    ACTIVITY_AWAITING.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::domain::{SampleId, StorageLocation};
    use crate::task::domain::{TaskPriority, TaskUpdate};
    use chrono::TimeDelta;
    use mockable::{Clock, DefaultClock};
    use rstest::rstest;

    fn move_task(sample: &str, source: &str, destination: &str) -> Task {
        Task::new_move(
            SampleId::new(sample).expect("valid sample id"),
            StorageLocation::new(source).expect("valid source"),
            StorageLocation::new(destination).expect("valid destination"),
            TaskPriority::Normal,
            &DefaultClock,
        )
    }

    fn in_progress_task(sample: &str, source: &str, destination: &str) -> Task {
        let mut task = move_task(sample, source, destination);
        task.apply_update(
            &TaskUpdate::new().with_status(TaskStatus::InProgress),
            &DefaultClock,
        )
        .expect("transition should succeed");
        task
    }

    #[rstest]
    fn empty_store_without_watermark_reads_idle() {
        let now = DefaultClock.utc();

        assert_eq!(derive_activity(&[], None, now), ACTIVITY_AWAITING);
    }

    #[rstest]
    fn in_progress_task_names_sample_and_route() {
        let now = DefaultClock.utc();
        let tasks = vec![in_progress_task("S1", "A", "B")];

        let activity = derive_activity(&tasks, None, now);

        assert_eq!(activity, "Moving sample S1 from A to B");
    }

    #[rstest]
    fn in_progress_task_beats_fresh_watermark() {
        let now = DefaultClock.utc();
        let tasks = vec![in_progress_task("S1", "A", "B")];

        let activity = derive_activity(&tasks, Some(now), now);

        assert_eq!(activity, "Moving sample S1 from A to B");
    }

    #[rstest]
    fn first_in_progress_task_in_list_order_wins() {
        let now = DefaultClock.utc();
        let tasks = vec![
            move_task("S0", "A", "B"),
            in_progress_task("S1", "Bench A", "Bench B"),
            in_progress_task("S2", "Bench C", "Freezer A1"),
        ];

        let activity = derive_activity(&tasks, None, now);

        assert_eq!(activity, "Moving sample S1 from Bench A to Bench B");
    }

    #[rstest]
    #[case(1000, ACTIVITY_TASK_COMPLETE)]
    #[case(2999, ACTIVITY_TASK_COMPLETE)]
    #[case(3000, ACTIVITY_AWAITING)]
    #[case(5000, ACTIVITY_AWAITING)]
    fn watermark_window_is_a_strict_comparison(
        #[case] elapsed_ms: i64,
        #[case] expected: &str,
    ) {
        let now = DefaultClock.utc();
        let mark = now - TimeDelta::milliseconds(elapsed_ms);

        assert_eq!(derive_activity(&[], Some(mark), now), expected);
    }

    #[rstest]
    fn queued_and_terminal_tasks_do_not_show_as_activity() {
        let now = DefaultClock.utc();
        let mut finished = in_progress_task("S1", "A", "B");
        finished
            .apply_update(
                &TaskUpdate::new().with_status(TaskStatus::Completed),
                &DefaultClock,
            )
            .expect("transition should succeed");
        let tasks = vec![move_task("S2", "B", "C"), finished];

        let activity = derive_activity(&tasks, None, now);

        assert_eq!(activity, ACTIVITY_AWAITING);
    }
}
