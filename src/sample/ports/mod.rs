//! Port contracts for the sample directory.

mod repository;

pub use repository::{SampleRepository, SampleRepositoryError, SampleRepositoryResult};
