//! Adapter implementations for the robot command port.

mod http;
mod memory;

pub use http::{DEFAULT_ROBOT_SERVER_URL, HttpRobotCommander, ROBOT_SERVER_URL_ENV};
pub use memory::InMemoryRobotCommander;
