//! # ethstat-collector
//!
//! Turns the text printed by `ethtool` into metric families ready to be
//! exposed to a pull-based monitoring system.
//!
//! The crate does not run ethtool or look at the host. A collection pass is
//! handed an [`InterfaceEnumerator`] naming the interfaces to report on and a
//! [`DumpSource`] returning, per interface, the statistics dump
//! (`ethtool -S <if>`) and the settings dump (`ethtool <if>`).
//!
//! ## Metrics Produced
//!
//! - `ethtool_interface_speed` (gauge, labels `interface`, `duplex`): link
//!   speed in bits per second, `0` and `n/a` when the link reports neither
//! - `ethtool_<field>_total` (counter, label `interface`) for
//!   `rx_no_dma_resources` and the `rx_`/`tx_` packet, byte, broadcast,
//!   multicast and error counters
//! - `ethtool_<dir>_queue_<kind>_total` (counter, labels `interface`,
//!   `queue`) for per-queue packet and byte counters
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ethstat_collector::{DirectorySource, EthtoolCollector, SourceErrorPolicy};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let collector = EthtoolCollector::from_source(DirectorySource::new("captures"))
//!         .on_source_error(SourceErrorPolicy::Fail);
//!
//!     for family in collector.collect()? {
//!         println!("{} ({}): {} samples", family.name(), family.kind(), family.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod collector;
pub mod error;
pub mod extract;
pub mod line;
pub mod size;
pub mod source;

pub use aggregate::MetricAggregator;
pub use collector::{EthtoolCollector, SourceErrorPolicy};
pub use error::CollectError;
pub use extract::{extract_info, extract_stats, parse_info, InterfaceInfo};
pub use line::{is_interesting, parse_line, ParsedLine, ParsedStat};
pub use size::convert_size;
pub use source::{DirectorySource, DumpKind, DumpSource, InterfaceEnumerator, StaticSource};

// Re-export types for convenience
pub use ethstat_types::{FamilyError, LabelSet, MetricFamily, MetricKind, Sample};
