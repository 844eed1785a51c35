//! Grouping of parsed records into metric families.

use std::collections::HashMap;

use ethstat_types::{FamilyError, LabelSet, MetricFamily, MetricKind};

/// Accumulates records into metric families for a single collection pass.
///
/// Families are kept in the order their names were first seen. The first
/// record for a name fixes the family's help text, kind and label schema;
/// later records must match that schema exactly.
#[derive(Debug, Default)]
pub struct MetricAggregator {
    families: Vec<MetricFamily>,
    index: HashMap<String, usize>,
}

impl MetricAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a counter sample.
    pub fn add_counter(
        &mut self,
        name: &str,
        documentation: &str,
        labels: &LabelSet,
        value: f64,
    ) -> Result<(), FamilyError> {
        self.add(MetricKind::Counter, name, documentation, labels, value)
    }

    /// Record a gauge sample.
    pub fn add_gauge(
        &mut self,
        name: &str,
        documentation: &str,
        labels: &LabelSet,
        value: f64,
    ) -> Result<(), FamilyError> {
        self.add(MetricKind::Gauge, name, documentation, labels, value)
    }

    fn add(
        &mut self,
        kind: MetricKind,
        name: &str,
        documentation: &str,
        labels: &LabelSet,
        value: f64,
    ) -> Result<(), FamilyError> {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.families
                    .push(MetricFamily::new(name, documentation, kind, labels.names()));
                self.index.insert(name.to_string(), self.families.len() - 1);
                self.families.len() - 1
            }
        };

        let family = &mut self.families[idx];
        if family.kind() != kind {
            return Err(FamilyError::KindMismatch {
                family: name.to_string(),
                existing: family.kind(),
                requested: kind,
            });
        }
        family.add_labeled(labels, value)
    }

    /// Get a family by name.
    pub fn get(&self, name: &str) -> Option<&MetricFamily> {
        self.index.get(name).map(|&idx| &self.families[idx])
    }

    /// All families in first-seen order.
    pub fn families(&self) -> &[MetricFamily] {
        &self.families
    }

    pub fn into_families(self) -> Vec<MetricFamily> {
        self.families
    }

    /// Number of families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_labels(interface: &str, queue: &str) -> LabelSet {
        LabelSet::from([("interface", interface), ("queue", queue)])
    }

    #[test]
    fn test_queues_share_one_family() {
        let mut agg = MetricAggregator::new();
        agg.add_counter(
            "ethtool_tx_queue_bytes_total",
            "tx_queue_N_bytes",
            &queue_labels("eth0", "5"),
            1467719549558.0,
        )
        .unwrap();
        agg.add_counter(
            "ethtool_tx_queue_bytes_total",
            "tx_queue_N_bytes",
            &queue_labels("eth0", "3"),
            100.0,
        )
        .unwrap();

        assert_eq!(agg.len(), 1);
        let family = agg.get("ethtool_tx_queue_bytes_total").unwrap();
        assert_eq!(family.kind(), MetricKind::Counter);
        assert_eq!(family.help(), "tx_queue_N_bytes");
        assert_eq!(family.label_names(), ["interface", "queue"]);
        assert_eq!(family.samples()[0].label_values, vec!["eth0", "5"]);
        assert_eq!(family.samples()[1].label_values, vec!["eth0", "3"]);
    }

    #[test]
    fn test_insertion_order() {
        let mut agg = MetricAggregator::new();
        let labels = LabelSet::from([("interface", "eth0")]);
        for name in ["ethtool_tx_packets_total", "ethtool_rx_packets_total", "ethtool_rx_bytes_total"] {
            agg.add_counter(name, "", &labels, 1.0).unwrap();
        }
        agg.add_counter("ethtool_tx_packets_total", "", &LabelSet::from([("interface", "eth1")]), 2.0)
            .unwrap();

        let names: Vec<_> = agg.families().iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["ethtool_tx_packets_total", "ethtool_rx_packets_total", "ethtool_rx_bytes_total"]
        );
        assert_eq!(agg.get("ethtool_tx_packets_total").unwrap().len(), 2);
    }

    #[test]
    fn test_first_record_fixes_help() {
        let mut agg = MetricAggregator::new();
        let labels = LabelSet::from([("interface", "eth0")]);
        agg.add_counter("ethtool_rx_errors_total", "rx_errors", &labels, 1.0).unwrap();
        agg.add_counter("ethtool_rx_errors_total", "something else", &labels, 2.0).unwrap();

        assert_eq!(agg.get("ethtool_rx_errors_total").unwrap().help(), "rx_errors");
    }

    #[test]
    fn test_schema_mismatch_fails() {
        let mut agg = MetricAggregator::new();
        agg.add_counter(
            "ethtool_rx_queue_bytes_total",
            "rx_queue_N_bytes",
            &queue_labels("eth0", "0"),
            1.0,
        )
        .unwrap();

        let err = agg
            .add_counter(
                "ethtool_rx_queue_bytes_total",
                "rx_queue_N_bytes",
                &LabelSet::from([("interface", "eth0")]),
                2.0,
            )
            .unwrap_err();

        assert!(matches!(err, FamilyError::SchemaMismatch { .. }));
        assert_eq!(agg.get("ethtool_rx_queue_bytes_total").unwrap().len(), 1);
    }

    #[test]
    fn test_kind_mismatch_fails() {
        let mut agg = MetricAggregator::new();
        let labels = LabelSet::from([("interface", "eth0"), ("duplex", "Full")]);
        agg.add_gauge("ethtool_interface_speed", "", &labels, 1.0).unwrap();

        let err = agg
            .add_counter("ethtool_interface_speed", "", &labels, 1.0)
            .unwrap_err();
        assert_eq!(
            err,
            FamilyError::KindMismatch {
                family: "ethtool_interface_speed".to_string(),
                existing: MetricKind::Gauge,
                requested: MetricKind::Counter,
            }
        );
    }

    #[test]
    fn test_empty_labels() {
        let mut agg = MetricAggregator::new();
        agg.add_counter("ethtool_rx_packets_total", "rx_packets", &LabelSet::new(), 3.0)
            .unwrap();

        let families = agg.into_families();
        let family = &families[0];
        assert!(family.label_names().is_empty());
        assert!(family.samples()[0].label_values.is_empty());
    }
}
