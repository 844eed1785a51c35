//! # ethstat-types
//!
//! Core types for exposing network-interface statistics as metrics. This
//! crate defines the metric families that the ethstat collector produces and
//! that exporters consume when encoding a scrape response.
//!
//! ## Model
//!
//! - A [`MetricFamily`] fixes a name, a help string, a [`MetricKind`] and an
//!   ordered list of label names.
//! - Each [`Sample`] in a family carries one label value per label name, in
//!   the same order, plus a numeric value.
//! - A [`LabelSet`] is an ordered list of `(name, value)` pairs. Order is
//!   significant: it defines the label schema of the family a set lands in.
//!
//! ## Features
//!
//! - `serde`: `Serialize` support for families, samples and label sets
//!
//! ## Example
//!
//! ```rust
//! use ethstat_types::{LabelSet, MetricFamily, MetricKind};
//!
//! let mut family = MetricFamily::counter(
//!     "ethtool_tx_queue_bytes_total",
//!     "tx_queue_N_bytes",
//!     ["interface", "queue"],
//! );
//!
//! family
//!     .add_labeled(&LabelSet::from([("interface", "eth0"), ("queue", "5")]), 1024.0)
//!     .unwrap();
//!
//! assert_eq!(family.kind(), MetricKind::Counter);
//! assert_eq!(family.len(), 1);
//!
//! // A sample with a different schema is rejected instead of being misaligned.
//! let err = family.add_labeled(&LabelSet::from([("interface", "eth0")]), 1.0);
//! assert!(err.is_err());
//! ```

mod error;
mod family;
mod labels;

pub use error::FamilyError;
pub use family::{MetricFamily, MetricFamilyBuilder, MetricKind, Sample};
pub use labels::LabelSet;
