//! Status services for the robot controller.

mod status;

pub use status::{RobotStatusError, RobotStatusResult, RobotStatusService};
