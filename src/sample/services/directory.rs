//! Service layer for sample listing and lookup.

use crate::sample::{
    domain::{Sample, SampleDomainError, SampleId},
    ports::{SampleRepository, SampleRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for sample directory queries.
#[derive(Debug, Error)]
pub enum SampleDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] SampleDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] SampleRepositoryError),
}

/// Result type for sample directory operations.
pub type SampleDirectoryResult<T> = Result<T, SampleDirectoryError>;

/// Sample directory query service.
#[derive(Clone)]
pub struct SampleDirectoryService<R>
where
    R: SampleRepository,
{
    repository: Arc<R>,
}

impl<R> SampleDirectoryService<R>
where
    R: SampleRepository,
{
    /// Creates a new directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all tracked samples in registration order.
    ///
    /// # Errors
    ///
    /// Returns persistence-layer errors from the repository.
    pub async fn list(&self) -> SampleDirectoryResult<Vec<Sample>> {
        Ok(self.repository.list_all().await?)
    }

    /// Finds a sample by its raw identifier string.
    ///
    /// Returns `Ok(None)` when no sample carries the identifier.
    ///
    /// # Errors
    ///
    /// Returns domain validation errors for an empty identifier and
    /// persistence errors from the repository.
    pub async fn find(&self, id: &str) -> SampleDirectoryResult<Option<Sample>> {
        let sample_id = SampleId::new(id)?;
        Ok(self.repository.find_by_id(&sample_id).await?)
    }
}
