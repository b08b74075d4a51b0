//! Port contracts for the robot controller.

mod commander;

pub use commander::{RobotCommandError, RobotCommandResult, RobotCommander};
