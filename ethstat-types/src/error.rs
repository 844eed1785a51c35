//! Errors raised when a sample does not fit its metric family.

use thiserror::Error;

use crate::MetricKind;

/// Errors that can occur when adding samples to a [`MetricFamily`](crate::MetricFamily).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyError {
    /// The sample's label names differ from the family's schema.
    #[error(
        "Label schema mismatch for {family}: expected [{}], found [{}]",
        .expected.join(", "),
        .found.join(", ")
    )]
    SchemaMismatch {
        family: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// The sample carries a different number of label values than the family has label names.
    #[error("{family} expects {expected} label values, got {found}")]
    Arity {
        family: String,
        expected: usize,
        found: usize,
    },

    /// The family was already registered with another kind.
    #[error("{family} is a {existing}, cannot record it as a {requested}")]
    KindMismatch {
        family: String,
        existing: MetricKind,
        requested: MetricKind,
    },
}

impl FamilyError {
    /// Name of the family that rejected the sample.
    pub fn family(&self) -> &str {
        match self {
            FamilyError::SchemaMismatch { family, .. }
            | FamilyError::Arity { family, .. }
            | FamilyError::KindMismatch { family, .. } => family,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_message() {
        let err = FamilyError::SchemaMismatch {
            family: "ethtool_tx_queue_bytes_total".to_string(),
            expected: vec!["interface".to_string(), "queue".to_string()],
            found: vec!["interface".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "Label schema mismatch for ethtool_tx_queue_bytes_total: expected [interface, queue], found [interface]"
        );
        assert_eq!(err.family(), "ethtool_tx_queue_bytes_total");
    }

    #[test]
    fn test_kind_mismatch_message() {
        let err = FamilyError::KindMismatch {
            family: "ethtool_interface_speed".to_string(),
            existing: MetricKind::Gauge,
            requested: MetricKind::Counter,
        };

        assert_eq!(
            err.to_string(),
            "ethtool_interface_speed is a gauge, cannot record it as a counter"
        );
    }
}
