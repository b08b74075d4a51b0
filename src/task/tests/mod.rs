//! Unit and service tests for the task lifecycle module.

mod queue_service_tests;
mod repository_tests;
