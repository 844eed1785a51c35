//! Classification and parsing of single ethtool output lines.
//!
//! ethtool prints one `field: value` pair per line, indented by a driver- and
//! version-dependent amount of whitespace. Statistics dumps (`ethtool -S`)
//! carry counters; settings dumps (`ethtool <if>`) carry `Speed` and
//! `Duplex` among many fields we ignore.
//!
//! Lines are free-form and vary by driver, so nothing here is an error: a line
//! that does not look like something we export is simply skipped.

use std::sync::LazyLock;

use ethstat_types::LabelSet;
use regex::Regex;

use crate::size::convert_size;

static INTERESTING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\W*(?:rx_no_dma_resources|Speed|Duplex|(?:tx|rx)_queue_[0-9]+_(?:bytes|packets)|(?:rx|tx)_(?:packets|bytes|broadcast|multicast|errors))",
    )
    .unwrap()
});

static STAT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W*(\w+): ([0-9]+)").unwrap());

static QUEUE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(tx|rx)_queue_([0-9]+)_(bytes|packets)$").unwrap());

static SPEED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W*Speed:\s+([0-9]+)([KMGTPEZY]b)/s").unwrap());

static DUPLEX_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W*Duplex: (\w+)").unwrap());

/// Prefix of every exported metric name.
pub const METRIC_PREFIX: &str = "ethtool_";

/// Documentation string of the link speed field.
pub const SPEED_FIELD: &str = "Speed";

/// A numeric record parsed from one line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStat {
    /// Full metric name, e.g. `ethtool_rx_packets_total`.
    pub name: String,
    /// Help text. Queue fields use an `N` placeholder for the queue index.
    pub documentation: String,
    pub labels: LabelSet,
    pub value: f64,
}

/// Result of parsing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// A `field: digits` line, including `Speed`.
    Stat(ParsedStat),
    /// A `Duplex: <mode>` line.
    Duplex(String),
}

impl ParsedLine {
    pub fn as_stat(&self) -> Option<&ParsedStat> {
        match self {
            ParsedLine::Stat(stat) => Some(stat),
            ParsedLine::Duplex(_) => None,
        }
    }

    pub fn into_stat(self) -> Option<ParsedStat> {
        match self {
            ParsedLine::Stat(stat) => Some(stat),
            ParsedLine::Duplex(_) => None,
        }
    }
}

/// Whether `line` carries a field we export.
pub fn is_interesting(line: &str) -> bool {
    INTERESTING.is_match(line)
}

/// Parse a single line.
///
/// Per-queue fields (`tx_queue_5_bytes`) are folded into one metric per
/// direction and kind (`ethtool_tx_queue_bytes_total`) with the queue index
/// as a `queue` label. The queue pattern must match the whole field name,
/// unlike the prefix check in [`is_interesting`]: a field that only starts
/// with it, such as `rx_queue_0_bytes_nic`, keeps its own metric name and
/// gets no `queue` label. A `Speed: <n><unit>/s` line is converted to bits per
/// second.
///
/// Returns `None` for lines of any other shape.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let Some(caps) = STAT_LINE.captures(line) else {
        return DUPLEX_LINE
            .captures(line)
            .map(|caps| ParsedLine::Duplex(caps[1].to_string()));
    };
    let field = &caps[1];

    let mut labels = LabelSet::new();
    let (base, documentation) = match QUEUE_FIELD.captures(field) {
        Some(queue) => {
            labels.push("queue", &queue[2]);
            (
                format!("{}_queue_{}", &queue[1], &queue[3]),
                format!("{}_queue_N_{}", &queue[1], &queue[3]),
            )
        }
        None => (field.to_string(), field.to_string()),
    };

    let value = match SPEED_LINE.captures(line) {
        Some(speed) => convert_size(speed[1].parse().ok()?, &speed[2]),
        None => caps[2].parse().ok()?,
    };

    Some(ParsedLine::Stat(ParsedStat {
        name: format!("{METRIC_PREFIX}{base}_total"),
        documentation,
        labels,
        value,
    }))
}
