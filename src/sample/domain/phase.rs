//! Protocol phases a sample moves through, in bench order.

use super::ParseProtocolPhaseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One phase of the fixed wet-lab protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolPhase {
    /// Polymerase chain reaction amplification.
    #[serde(rename = "PCR")]
    Pcr,
    /// Gel electrophoresis verification.
    Gel,
    /// Zymo column clean-up.
    Zymo,
    /// Fragment assembly.
    Assembly,
    /// Transformation into competent cells.
    Transformation,
    /// Colony picking.
    Picking,
    /// Plasmid miniprep.
    Miniprep,
    /// Sequence verification.
    Sequence,
}

/// The protocol phases in execution order.
pub const PROTOCOL_SEQUENCE: [ProtocolPhase; 8] = [
    ProtocolPhase::Pcr,
    ProtocolPhase::Gel,
    ProtocolPhase::Zymo,
    ProtocolPhase::Assembly,
    ProtocolPhase::Transformation,
    ProtocolPhase::Picking,
    ProtocolPhase::Miniprep,
    ProtocolPhase::Sequence,
];

impl ProtocolPhase {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pcr => "PCR",
            Self::Gel => "Gel",
            Self::Zymo => "Zymo",
            Self::Assembly => "Assembly",
            Self::Transformation => "Transformation",
            Self::Picking => "Picking",
            Self::Miniprep => "Miniprep",
            Self::Sequence => "Sequence",
        }
    }

    /// Returns the phase that follows this one, or `None` for the final
    /// phase.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Pcr => Some(Self::Gel),
            Self::Gel => Some(Self::Zymo),
            Self::Zymo => Some(Self::Assembly),
            Self::Assembly => Some(Self::Transformation),
            Self::Transformation => Some(Self::Picking),
            Self::Picking => Some(Self::Miniprep),
            Self::Miniprep => Some(Self::Sequence),
            Self::Sequence => None,
        }
    }
}

impl fmt::Display for ProtocolPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProtocolPhase {
    type Error = ParseProtocolPhaseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "PCR" => Ok(Self::Pcr),
            "Gel" => Ok(Self::Gel),
            "Zymo" => Ok(Self::Zymo),
            "Assembly" => Ok(Self::Assembly),
            "Transformation" => Ok(Self::Transformation),
            "Picking" => Ok(Self::Picking),
            "Miniprep" => Ok(Self::Miniprep),
            "Sequence" => Ok(Self::Sequence),
            _ => Err(ParseProtocolPhaseError(value.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn successor_walks_the_protocol_in_sequence_order() {
        let mut walked = vec![ProtocolPhase::Pcr];
        while let Some(next) = walked.last().and_then(|phase| phase.successor()) {
            walked.push(next);
        }

        assert_eq!(walked, PROTOCOL_SEQUENCE);
    }

    #[rstest]
    fn wire_names_round_trip() {
        for phase in PROTOCOL_SEQUENCE {
            assert_eq!(ProtocolPhase::try_from(phase.as_str()), Ok(phase));
        }
    }

    #[rstest]
    fn unknown_phase_name_is_rejected() {
        assert_eq!(
            ProtocolPhase::try_from("Lyophilization"),
            Err(ParseProtocolPhaseError("Lyophilization".to_owned()))
        );
    }

    #[rstest]
    fn serde_uses_the_wire_names() {
        let encoded = serde_json::to_string(&ProtocolPhase::Pcr).expect("serialization");

        assert_eq!(encoded, "\"PCR\"");
    }
}
