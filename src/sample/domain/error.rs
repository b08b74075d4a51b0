//! Error types for sample domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain sample values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SampleDomainError {
    /// The sample identifier is empty after trimming.
    #[error("sample identifier must not be empty")]
    EmptySampleId,

    /// The storage location label is empty after trimming.
    #[error("storage location must not be empty")]
    EmptyStorageLocation,
}

/// Error returned while parsing protocol phases from wire input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown protocol phase: {0}")]
pub struct ParseProtocolPhaseError(pub String);
