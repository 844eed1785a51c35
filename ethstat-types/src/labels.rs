//! Ordered label sets.

/// An ordered list of `(name, value)` label pairs.
///
/// Unlike a map, a `LabelSet` keeps insertion order. The order of names is the
/// label schema of the family the set is recorded into, so two sets with the
/// same pairs in a different order are not interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LabelSet(Vec<(String, String)>);

impl LabelSet {
    /// Create an empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label and return the set (builder style).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a label at the end.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Insert a label in front of all existing labels.
    pub fn prepend(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(0, (name.into(), value.into()));
    }

    /// Value of the first label called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The first label, if any.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.0.first().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Label names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    /// Label values in order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LabelSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for LabelSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_keeps_existing_order() {
        let mut labels = LabelSet::new().with("queue", "5");
        labels.prepend("interface", "eth0");

        let names: Vec<_> = labels.names().collect();
        assert_eq!(names, vec!["interface", "queue"]);
        assert_eq!(labels.first(), Some(("interface", "eth0")));
        assert_eq!(labels.get("queue"), Some("5"));
        assert_eq!(labels.get("duplex"), None);
    }

    #[test]
    fn test_order_is_significant() {
        let a = LabelSet::from([("interface", "eth0"), ("queue", "1")]);
        let b = LabelSet::from([("queue", "1"), ("interface", "eth0")]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty() {
        let labels = LabelSet::new();
        assert!(labels.is_empty());
        assert_eq!(labels.len(), 0);
        assert_eq!(labels.first(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_pair_list() {
        let labels = LabelSet::from([("interface", "eth0"), ("duplex", "Full")]);
        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"[["interface","eth0"],["duplex","Full"]]"#);

        let parsed: LabelSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, labels);
    }
}
