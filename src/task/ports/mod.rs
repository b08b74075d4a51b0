//! Port contracts for the task store.

mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
