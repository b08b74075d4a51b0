//! Identifier and validated scalar types shared across the sample and task
//! domains.

use super::SampleDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-assigned sample label, e.g. `PCR-2025-001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleId(String);

impl SampleId {
    /// Creates a validated sample identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SampleDomainError::EmptySampleId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, SampleDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(SampleDomainError::EmptySampleId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SampleId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named storage position in the lab, e.g. `Bench A` or `Freezer A3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageLocation(String);

impl StorageLocation {
    /// Creates a validated storage location label.
    ///
    /// # Errors
    ///
    /// Returns [`SampleDomainError::EmptyStorageLocation`] when the label is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, SampleDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(SampleDomainError::EmptyStorageLocation);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the location label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StorageLocation {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
