//! Domain model for robot commands and status reporting.

mod activity;
mod command;
mod status;

pub use activity::{
    ACTIVITY_AWAITING, ACTIVITY_TASK_COMPLETE, RECENT_COMPLETION_WINDOW_MS, derive_activity,
};
pub use command::{MoveCommand, RobotResponse};
pub use status::{RobotConnectionStatus, RobotStatusReport};
