//! Repository port for sample lookup.

use crate::sample::domain::{Sample, SampleId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for sample repository operations.
pub type SampleRepositoryResult<T> = Result<T, SampleRepositoryError>;

/// Sample lookup contract.
///
/// The directory is read-only from the dashboard's perspective; writes happen
/// only at seeding time through adapter-specific constructors.
#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// Returns all tracked samples in registration order.
    async fn list_all(&self) -> SampleRepositoryResult<Vec<Sample>>;

    /// Finds a sample by identifier.
    ///
    /// Returns `None` when the sample does not exist.
    async fn find_by_id(&self, id: &SampleId) -> SampleRepositoryResult<Option<Sample>>;
}

/// Errors returned by sample repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SampleRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SampleRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
