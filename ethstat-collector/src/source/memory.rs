//! In-memory dump source.

use std::collections::BTreeMap;

use super::{DumpKind, DumpSource, InterfaceEnumerator};
use crate::CollectError;

#[derive(Debug, Clone, Default)]
struct Dumps {
    statistics: Option<String>,
    info: Option<String>,
}

/// A source that serves dumps held in memory.
///
/// Interfaces are enumerated in name order. Useful for replaying captured
/// output and for tests.
///
/// # Example
///
/// ```
/// use ethstat_collector::{DumpSource, InterfaceEnumerator, StaticSource};
///
/// let source = StaticSource::new()
///     .with_statistics("eth0", "     rx_packets: 10\n")
///     .with_info("eth0", "\tSpeed: 1000Mb/s\n\tDuplex: Full\n");
///
/// assert_eq!(source.interfaces().unwrap(), vec!["eth0"]);
/// assert!(source.statistics("eth0").unwrap().contains("rx_packets"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    interfaces: BTreeMap<String, Dumps>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the statistics dump for an interface.
    pub fn with_statistics(mut self, interface: impl Into<String>, text: impl Into<String>) -> Self {
        self.interfaces.entry(interface.into()).or_default().statistics = Some(text.into());
        self
    }

    /// Set the settings dump for an interface.
    pub fn with_info(mut self, interface: impl Into<String>, text: impl Into<String>) -> Self {
        self.interfaces.entry(interface.into()).or_default().info = Some(text.into());
        self
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

impl InterfaceEnumerator for StaticSource {
    fn interfaces(&self) -> Result<Vec<String>, CollectError> {
        Ok(self.interfaces.keys().cloned().collect())
    }
}

impl DumpSource for StaticSource {
    fn dump(&self, interface: &str, kind: DumpKind) -> Result<String, CollectError> {
        let dumps = self.interfaces.get(interface);
        let text = match kind {
            DumpKind::Statistics => dumps.and_then(|d| d.statistics.as_ref()),
            DumpKind::Info => dumps.and_then(|d| d.info.as_ref()),
        };
        text.cloned().ok_or_else(|| CollectError::MissingDump {
            interface: interface.to_string(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interfaces_sorted() {
        let source = StaticSource::new()
            .with_statistics("eth1", "")
            .with_info("eth0", "")
            .with_statistics("eth0", "");

        assert_eq!(source.len(), 2);
        assert_eq!(source.interfaces().unwrap(), vec!["eth0", "eth1"]);
    }

    #[test]
    fn test_missing_dump() {
        let source = StaticSource::new().with_statistics("eth0", "     rx_packets: 1\n");

        assert_eq!(source.statistics("eth0").unwrap(), "     rx_packets: 1\n");
        let err = source.info("eth0").unwrap_err();
        assert!(err.is_dump_error());
        assert_eq!(err.to_string(), "No info dump for interface eth0");

        assert!(matches!(
            source.statistics("eth9"),
            Err(CollectError::MissingDump { kind: DumpKind::Statistics, .. })
        ));
    }
}
