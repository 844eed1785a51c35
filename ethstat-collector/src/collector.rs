//! Collection passes over all interfaces.

use ethstat_types::MetricFamily;
use tracing::{debug, warn};

use crate::aggregate::MetricAggregator;
use crate::extract::{extract_info, extract_stats};
use crate::source::{DumpKind, DumpSource, InterfaceEnumerator};
use crate::CollectError;

/// What a collection pass does when an interface's dump cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceErrorPolicy {
    /// Abort the pass with the error.
    Fail,
    /// Leave the whole interface out of the pass and carry on.
    #[default]
    Skip,
}

/// Collects ethtool metrics for every interface a source names.
///
/// Each call to [`collect`](Self::collect) is an independent pass with its
/// own aggregator; nothing is carried over between passes.
///
/// # Example
///
/// ```
/// use ethstat_collector::{EthtoolCollector, StaticSource};
///
/// let source = StaticSource::new()
///     .with_statistics("eth0", "     rx_no_dma_resources: 590843871\n")
///     .with_info("eth0", "\tSpeed: 1000Mb/s\n\tDuplex: Full\n");
///
/// let families = EthtoolCollector::from_source(source).collect().unwrap();
///
/// assert_eq!(families[0].name(), "ethtool_interface_speed");
/// assert_eq!(families[1].name(), "ethtool_rx_no_dma_resources_total");
/// ```
#[derive(Debug)]
pub struct EthtoolCollector {
    interfaces: Box<dyn InterfaceEnumerator>,
    dumps: Box<dyn DumpSource>,
    policy: SourceErrorPolicy,
}

impl EthtoolCollector {
    /// Create a collector from an interface enumerator and a dump source.
    pub fn new(
        interfaces: impl InterfaceEnumerator + 'static,
        dumps: impl DumpSource + 'static,
    ) -> Self {
        Self {
            interfaces: Box::new(interfaces),
            dumps: Box::new(dumps),
            policy: SourceErrorPolicy::default(),
        }
    }

    /// Create a collector from a source that both names interfaces and serves their dumps.
    pub fn from_source<S>(source: S) -> Self
    where
        S: InterfaceEnumerator + DumpSource + Clone + 'static,
    {
        Self::new(source.clone(), source)
    }

    /// Set the policy for dumps that cannot be fetched.
    pub fn on_source_error(mut self, policy: SourceErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> SourceErrorPolicy {
        self.policy
    }

    /// Run one collection pass.
    ///
    /// Both dumps of every interface are fetched first. Under
    /// [`SourceErrorPolicy::Skip`] an interface whose dumps cannot both be
    /// fetched is left out of the pass entirely, so each reported interface
    /// has exactly one speed gauge and its counters.
    ///
    /// Speed gauges for all interfaces come first, then the counters from
    /// each statistics dump. Families keep the order their names were first
    /// seen in.
    pub fn collect(&self) -> Result<Vec<MetricFamily>, CollectError> {
        let interfaces = self.interfaces.interfaces()?;
        debug!("Collecting ethtool metrics for {} interfaces", interfaces.len());

        let mut dumps = Vec::with_capacity(interfaces.len());
        for interface in &interfaces {
            if let Some((info, stats)) = self.fetch(interface)? {
                dumps.push((interface.as_str(), info, stats));
            }
        }

        let mut aggregator = MetricAggregator::new();

        for (interface, info, _) in &dumps {
            let speed = extract_info(interface, info);
            aggregator.add_gauge(&speed.name, &speed.documentation, &speed.labels, speed.value)?;
        }

        for (interface, _, text) in &dumps {
            let stats = extract_stats(interface, text);
            debug!("{}: {} statistics", interface, stats.len());
            for stat in &stats {
                aggregator.add_counter(&stat.name, &stat.documentation, &stat.labels, stat.value)?;
            }
        }

        Ok(aggregator.into_families())
    }

    /// Fetch the info and statistics dumps of one interface.
    ///
    /// Returns `None` when a dump is unavailable and the policy is to skip.
    fn fetch(&self, interface: &str) -> Result<Option<(String, String)>, CollectError> {
        let both = self
            .dumps
            .dump(interface, DumpKind::Info)
            .and_then(|info| Ok((info, self.dumps.dump(interface, DumpKind::Statistics)?)));

        match both {
            Ok(dumps) => Ok(Some(dumps)),
            Err(e) if e.is_dump_error() && self.policy == SourceErrorPolicy::Skip => {
                warn!("Skipping interface {}: {}", interface, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
