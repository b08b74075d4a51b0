//! Domain model for the sample directory.
//!
//! Samples carry their storage location and protocol progress; the task
//! domain references them by identifier only and never owns their lifecycle.

mod error;
mod ids;
mod phase;
mod sample;

pub use error::{ParseProtocolPhaseError, SampleDomainError};
pub use ids::{SampleId, StorageLocation};
pub use phase::{PROTOCOL_SEQUENCE, ProtocolPhase};
pub use sample::{Sample, SampleStatus};
