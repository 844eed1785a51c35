//! Per-interface extraction of records from ethtool dumps.

use ethstat_types::LabelSet;
use tracing::trace;

use crate::line::{is_interesting, parse_line, ParsedLine, ParsedStat, SPEED_FIELD};

/// Name of the link speed gauge.
pub const INTERFACE_SPEED_METRIC: &str = "ethtool_interface_speed";

/// Duplex label value when the dump does not report one.
pub const UNKNOWN_DUPLEX: &str = "n/a";

/// Extract counter records from an `ethtool -S <interface>` dump.
///
/// Each record gets an `interface` label in front of its own labels.
/// Lines that are not interesting or do not parse are dropped.
pub fn extract_stats(interface: &str, text: &str) -> Vec<ParsedStat> {
    text.lines()
        .filter(|line| is_interesting(line))
        .filter_map(|line| match parse_line(line) {
            Some(ParsedLine::Stat(mut stat)) => {
                stat.labels.prepend("interface", interface);
                Some(stat)
            }
            _ => {
                trace!(interface, line, "Dropping statistics line");
                None
            }
        })
        .collect()
}

/// Link settings read from an `ethtool <interface>` dump.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceInfo {
    /// Link speed in bits per second, `0` if unknown.
    pub speed: f64,
    pub duplex: String,
}

impl Default for InterfaceInfo {
    fn default() -> Self {
        Self {
            speed: 0.0,
            duplex: UNKNOWN_DUPLEX.to_string(),
        }
    }
}

impl InterfaceInfo {
    /// Turn the settings into the speed gauge record for `interface`.
    pub fn into_stat(self, interface: &str) -> ParsedStat {
        ParsedStat {
            name: INTERFACE_SPEED_METRIC.to_string(),
            documentation: String::new(),
            labels: LabelSet::new()
                .with("interface", interface)
                .with("duplex", self.duplex),
            value: self.speed,
        }
    }
}

/// Read speed and duplex from a settings dump.
///
/// A field that appears more than once takes its last value.
pub fn parse_info(text: &str) -> InterfaceInfo {
    let mut info = InterfaceInfo::default();
    for line in text.lines().filter(|line| is_interesting(line)) {
        match parse_line(line) {
            Some(ParsedLine::Stat(stat)) if stat.documentation == SPEED_FIELD => {
                info.speed = stat.value;
            }
            Some(ParsedLine::Duplex(duplex)) => info.duplex = duplex,
            _ => {}
        }
    }
    info
}

/// Extract the speed gauge record from an `ethtool <interface>` dump.
pub fn extract_info(interface: &str, text: &str) -> ParsedStat {
    parse_info(text).into_stat(interface)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IXGBE_STATS: &str = include_str!("../testdata/ixgbe_stats.txt");
    const IXGBE_INFO: &str = include_str!("../testdata/ixgbe_info.txt");

    #[test]
    fn test_single_stat_gets_interface_label() {
        let stats = extract_stats("eth0", "     rx_no_dma_resources: 590843871\n");

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].labels.first(), Some(("interface", "eth0")));
        assert_eq!(stats[0].value, 590843871.0);
    }

    #[test]
    fn test_interface_label_precedes_queue() {
        let stats = extract_stats("eth1", "     rx_queue_3_packets: 12\n");
        let labels: Vec<_> = stats[0].labels.iter().collect();
        assert_eq!(labels, vec![("interface", "eth1"), ("queue", "3")]);
    }

    #[test]
    fn test_noise_is_dropped() {
        let text = "NIC statistics:\n     rx_dropped: 5\n\n     tx_packets: 7\n     rx_packets: bogus\n";
        let stats = extract_stats("eth0", text);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].name, "ethtool_tx_packets_total");
    }

    #[test]
    fn test_duplex_in_statistics_dump_is_dropped() {
        assert!(extract_stats("eth0", "\tDuplex: Full\n").is_empty());
    }

    #[test]
    fn test_ixgbe_capture() {
        let stats = extract_stats("eth0", IXGBE_STATS);

        assert_eq!(stats.len(), 29);
        assert!(stats.iter().all(|s| s.labels.first() == Some(("interface", "eth0"))));

        let queue_bytes: Vec<_> = stats
            .iter()
            .filter(|s| s.name == "ethtool_tx_queue_bytes_total")
            .collect();
        assert_eq!(queue_bytes.len(), 6);
        assert_eq!(queue_bytes[5].labels.get("queue"), Some("5"));
        assert_eq!(queue_bytes[5].value, 1467719549558.0);
    }

    #[test]
    fn test_info_speed_and_duplex() {
        let stat = extract_info("eth0", "Speed: 1000Mb/s\nDuplex: Full\n");

        assert_eq!(stat.name, INTERFACE_SPEED_METRIC);
        assert_eq!(stat.value, 1_048_576_000.0);
        assert_eq!(
            stat.labels,
            LabelSet::from([("interface", "eth0"), ("duplex", "Full")])
        );
    }

    #[test]
    fn test_info_defaults() {
        let stat = extract_info("eth2", "Settings for eth2:\n\tLink detected: no\n");

        assert_eq!(stat.value, 0.0);
        assert_eq!(stat.labels.get("duplex"), Some(UNKNOWN_DUPLEX));
    }

    #[test]
    fn test_info_unknown_speed() {
        let info = parse_info("\tSpeed: Unknown!\n\tDuplex: Unknown! (255)\n");
        assert_eq!(info.speed, 0.0);
        assert_eq!(info.duplex, "Unknown");
    }

    #[test]
    fn test_info_last_value_wins() {
        let info = parse_info("\tSpeed: 100Mb/s\n\tDuplex: Half\n\tSpeed: 1000Mb/s\n\tDuplex: Full\n");
        assert_eq!(info.speed, 1_048_576_000.0);
        assert_eq!(info.duplex, "Full");
    }

    #[test]
    fn test_ixgbe_info_capture() {
        let info = parse_info(IXGBE_INFO);
        assert_eq!(info.speed, 10_000.0 * 1024.0 * 1024.0);
        assert_eq!(info.duplex, "Full");
    }
}
