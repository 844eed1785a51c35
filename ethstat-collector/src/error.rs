//! Error types for collection passes.

use ethstat_types::FamilyError;
use thiserror::Error;

use crate::source::DumpKind;

/// Errors that can occur while collecting interface metrics.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The interface list could not be produced.
    #[error("Failed to enumerate interfaces: {0}")]
    Enumerate(String),

    /// The source has no dump of this kind for the interface.
    #[error("No {kind} dump for interface {interface}")]
    MissingDump { interface: String, kind: DumpKind },

    /// Reading a dump failed.
    #[error("Failed to read {kind} dump for interface {interface}: {message}")]
    Dump {
        interface: String,
        kind: DumpKind,
        message: String,
    },

    /// A parsed record did not fit the metric family it belongs to.
    #[error(transparent)]
    Family(#[from] FamilyError),
}

impl CollectError {
    /// Whether the error came from fetching a single interface's dump.
    ///
    /// These are the errors a collector may skip; everything else aborts the pass.
    pub fn is_dump_error(&self) -> bool {
        matches!(self, CollectError::MissingDump { .. } | CollectError::Dump { .. })
    }
}
