//! Sample aggregate root.

use super::{ProtocolPhase, SampleId, StorageLocation};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a tracked sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleStatus {
    /// The sample is progressing through the protocol.
    Active,
    /// The sample has cleared the final protocol phase.
    Completed,
    /// The sample was lost or failed a phase.
    Failed,
}

impl SampleStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Sample aggregate root.
///
/// The dashboard consumes samples read-only; mutation happens outside this
/// core, so the aggregate exposes a constructor for seeding plus accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    id: SampleId,
    storage_location: StorageLocation,
    current_phase: ProtocolPhase,
    completed_phases: Vec<ProtocolPhase>,
    last_updated: DateTime<Utc>,
    status: SampleStatus,
}

impl Sample {
    /// Creates an active sample at the start of the protocol.
    #[must_use]
    pub fn new(id: SampleId, storage_location: StorageLocation, clock: &impl Clock) -> Self {
        Self {
            id,
            storage_location,
            current_phase: ProtocolPhase::Pcr,
            completed_phases: Vec::new(),
            last_updated: clock.utc(),
            status: SampleStatus::Active,
        }
    }

    /// Sets the current phase and the phases already cleared.
    ///
    /// Used when seeding the directory with samples mid-protocol.
    #[must_use]
    pub fn with_progress(
        mut self,
        current_phase: ProtocolPhase,
        completed_phases: impl IntoIterator<Item = ProtocolPhase>,
    ) -> Self {
        self.current_phase = current_phase;
        self.completed_phases = completed_phases.into_iter().collect();
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: SampleStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the sample identifier.
    #[must_use]
    pub const fn id(&self) -> &SampleId {
        &self.id
    }

    /// Returns the current storage location.
    #[must_use]
    pub const fn storage_location(&self) -> &StorageLocation {
        &self.storage_location
    }

    /// Returns the phase the sample currently sits in.
    #[must_use]
    pub const fn current_phase(&self) -> ProtocolPhase {
        self.current_phase
    }

    /// Returns the phases already cleared, in clearing order.
    #[must_use]
    pub fn completed_phases(&self) -> &[ProtocolPhase] {
        &self.completed_phases
    }

    /// Returns the timestamp of the last recorded change.
    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> SampleStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::DefaultClock;
    use rstest::rstest;

    #[rstest]
    fn sample_serializes_to_dashboard_wire_shape() {
        let sample = Sample::new(
            SampleId::new("PCR-2025-001").expect("valid id"),
            StorageLocation::new("Freezer A3").expect("valid location"),
            &DefaultClock,
        )
        .with_progress(
            ProtocolPhase::Assembly,
            [ProtocolPhase::Pcr, ProtocolPhase::Gel, ProtocolPhase::Zymo],
        );

        let value = serde_json::to_value(&sample).expect("serialization");
        let object = value.as_object().expect("object body");

        assert_eq!(
            object.get("id").and_then(|v| v.as_str()),
            Some("PCR-2025-001")
        );
        assert_eq!(
            object.get("storageLocation").and_then(|v| v.as_str()),
            Some("Freezer A3")
        );
        assert_eq!(
            object.get("currentPhase").and_then(|v| v.as_str()),
            Some("Assembly")
        );
        assert_eq!(
            object
                .get("completedPhases")
                .and_then(|v| v.as_array())
                .map(Vec::len),
            Some(3)
        );
        assert_eq!(object.get("status").and_then(|v| v.as_str()), Some("active"));
        assert!(object.contains_key("lastUpdated"));
    }

    #[rstest]
    fn status_override_applies() {
        let sample = Sample::new(
            SampleId::new("PCR-2025-006").expect("valid id"),
            StorageLocation::new("Bench C").expect("valid location"),
            &DefaultClock,
        )
        .with_status(SampleStatus::Completed);

        assert_eq!(sample.status(), SampleStatus::Completed);
        assert_eq!(sample.status().as_str(), "completed");
    }
}
