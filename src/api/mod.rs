//! Typed request/response surface for the dashboard routes.
//!
//! Route wiring (HTTP framework, path parsing, status-line emission) lives
//! outside this crate; it calls [`DashboardService`] and maps each
//! [`ApiError`] to its status code and JSON body. The shapes here are
//! exactly what the dashboard client sends and receives.

mod dashboard;
mod error;
mod requests;
mod responses;

pub use dashboard::DashboardService;
pub use error::ApiError;
pub use requests::{CreateTaskBody, UpdateTaskBody};
pub use responses::{DeletionReceipt, EmergencyStopReport};
