//! In-memory repository backing the sample directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::sample::{
    domain::{Sample, SampleId},
    ports::{SampleRepository, SampleRepositoryError, SampleRepositoryResult},
};

/// Thread-safe in-memory sample repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySampleRepository {
    state: Arc<RwLock<InMemorySampleState>>,
}

#[derive(Debug, Default)]
struct InMemorySampleState {
    samples: HashMap<SampleId, Sample>,
    insertion_order: Vec<SampleId>,
}

impl InMemorySampleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given samples.
    ///
    /// Later entries with a duplicate identifier replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns persistence errors when lock acquisition fails.
    pub fn with_samples(
        samples: impl IntoIterator<Item = Sample>,
    ) -> SampleRepositoryResult<Self> {
        let repository = Self::new();
        {
            let mut state = repository.state.write().map_err(|err| {
                SampleRepositoryError::persistence(std::io::Error::other(err.to_string()))
            })?;
            for sample in samples {
                let id = sample.id().clone();
                if state.samples.insert(id.clone(), sample).is_none() {
                    state.insertion_order.push(id);
                }
            }
        }
        Ok(repository)
    }
}

#[async_trait]
impl SampleRepository for InMemorySampleRepository {
    async fn list_all(&self) -> SampleRepositoryResult<Vec<Sample>> {
        let state = self.state.read().map_err(|err| {
            SampleRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.samples.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: &SampleId) -> SampleRepositoryResult<Option<Sample>> {
        let state = self.state.read().map_err(|err| {
            SampleRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.samples.get(id).cloned())
    }
}
