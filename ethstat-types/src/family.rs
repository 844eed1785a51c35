//! Metric families and their samples.

use std::fmt;

use crate::{FamilyError, LabelSet};

/// Kind of a metric family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MetricKind {
    /// Monotonically increasing count (packets, bytes, errors).
    Counter,
    /// Point-in-time value (link speed).
    Gauge,
}

impl MetricKind {
    /// Lowercase name, as used in exposition `TYPE` lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation within a family.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    /// Label values, positionally aligned with the family's label names.
    pub label_values: Vec<String>,
    pub value: f64,
}

impl Sample {
    pub fn new(label_values: Vec<String>, value: f64) -> Self {
        Self {
            label_values,
            value,
        }
    }
}

/// A named group of samples sharing a label schema.
///
/// The label schema is fixed when the family is created. Every sample added
/// afterwards must carry exactly one value per label name; anything else is
/// rejected with a [`FamilyError`] and leaves the family unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetricFamily {
    name: String,
    help: String,
    kind: MetricKind,
    label_names: Vec<String>,
    samples: Vec<Sample>,
}

impl MetricFamily {
    /// Create an empty family.
    pub fn new<I, S>(
        name: impl Into<String>,
        help: impl Into<String>,
        kind: MetricKind,
        label_names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            help: help.into(),
            kind,
            label_names: label_names.into_iter().map(Into::into).collect(),
            samples: Vec::new(),
        }
    }

    /// Create an empty counter family.
    pub fn counter<I, S>(name: impl Into<String>, help: impl Into<String>, label_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, help, MetricKind::Counter, label_names)
    }

    /// Create an empty gauge family.
    pub fn gauge<I, S>(name: impl Into<String>, help: impl Into<String>, label_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, help, MetricKind::Gauge, label_names)
    }

    /// Create a builder for a family called `name`.
    pub fn builder(name: impl Into<String>) -> MetricFamilyBuilder {
        MetricFamilyBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples in the family.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Append a sample given its label values in schema order.
    pub fn add_metric(&mut self, label_values: Vec<String>, value: f64) -> Result<(), FamilyError> {
        if label_values.len() != self.label_names.len() {
            return Err(FamilyError::Arity {
                family: self.name.clone(),
                expected: self.label_names.len(),
                found: label_values.len(),
            });
        }
        self.samples.push(Sample::new(label_values, value));
        Ok(())
    }

    /// Append a sample given a full label set.
    ///
    /// The set's names must equal the family's label names, in the same order.
    pub fn add_labeled(&mut self, labels: &LabelSet, value: f64) -> Result<(), FamilyError> {
        if !self.label_names.iter().map(String::as_str).eq(labels.names()) {
            return Err(FamilyError::SchemaMismatch {
                family: self.name.clone(),
                expected: self.label_names.clone(),
                found: labels.names().map(str::to_string).collect(),
            });
        }
        self.add_metric(labels.values().map(str::to_string).collect(), value)
    }

    /// Find the first sample with exactly these label values.
    pub fn sample(&self, label_values: &[&str]) -> Option<&Sample> {
        self.samples
            .iter()
            .find(|s| s.label_values.iter().map(String::as_str).eq(label_values.iter().copied()))
    }
}

/// Builder for `MetricFamily`.
#[derive(Debug)]
pub struct MetricFamilyBuilder {
    name: String,
    help: String,
    kind: MetricKind,
    label_names: Vec<String>,
    samples: Vec<(Vec<String>, f64)>,
}

impl MetricFamilyBuilder {
    /// Create a new builder. The family defaults to a counter without labels.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: String::new(),
            kind: MetricKind::Counter,
            label_names: Vec::new(),
            samples: Vec::new(),
        }
    }

    /// Set the help text.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Set the metric kind.
    pub fn kind(mut self, kind: MetricKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the label names.
    pub fn label_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add a sample.
    pub fn sample<I, S>(mut self, label_values: I, value: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.samples
            .push((label_values.into_iter().map(Into::into).collect(), value));
        self
    }

    /// Build the family, validating every sample against the label names.
    pub fn build(self) -> Result<MetricFamily, FamilyError> {
        let mut family = MetricFamily::new(self.name, self.help, self.kind, self.label_names);
        for (values, value) in self.samples {
            family.add_metric(values, value)?;
        }
        Ok(family)
    }
}
