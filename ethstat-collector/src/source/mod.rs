//! Sources of interface names and ethtool dumps.
//!
//! The collector never runs ethtool or inspects the host itself. It is handed
//! an [`InterfaceEnumerator`] that names the interfaces to report on and a
//! [`DumpSource`] that returns the raw text ethtool printed for each of them.

mod directory;
mod memory;

pub use directory::DirectorySource;
pub use memory::StaticSource;

use std::fmt::{self, Debug};

use crate::CollectError;

/// The two ethtool outputs a collection pass reads per interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DumpKind {
    /// Output of `ethtool -S <interface>`.
    Statistics,
    /// Output of `ethtool <interface>`.
    Info,
}

impl DumpKind {
    /// File extension used for captured dumps of this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            DumpKind::Statistics => "stats",
            DumpKind::Info => "info",
        }
    }

    pub(crate) fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "stats" => Some(DumpKind::Statistics),
            "info" => Some(DumpKind::Info),
            _ => None,
        }
    }
}

impl fmt::Display for DumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpKind::Statistics => f.write_str("statistics"),
            DumpKind::Info => f.write_str("info"),
        }
    }
}

/// Names the interfaces a collection pass covers.
pub trait InterfaceEnumerator: Debug {
    fn interfaces(&self) -> Result<Vec<String>, CollectError>;
}

impl InterfaceEnumerator for Vec<String> {
    fn interfaces(&self) -> Result<Vec<String>, CollectError> {
        Ok(self.clone())
    }
}

/// Provides raw ethtool output for an interface.
pub trait DumpSource: Debug {
    /// Return the dump of `kind` for `interface`.
    fn dump(&self, interface: &str, kind: DumpKind) -> Result<String, CollectError>;

    /// Statistics dump (`ethtool -S`).
    fn statistics(&self, interface: &str) -> Result<String, CollectError> {
        self.dump(interface, DumpKind::Statistics)
    }

    /// Settings dump (`ethtool`).
    fn info(&self, interface: &str) -> Result<String, CollectError> {
        self.dump(interface, DumpKind::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_kind_extension() {
        for kind in [DumpKind::Statistics, DumpKind::Info] {
            assert_eq!(DumpKind::from_extension(kind.extension()), Some(kind));
        }
        assert_eq!(DumpKind::from_extension("txt"), None);
    }

    #[test]
    fn test_vec_enumerator() {
        let interfaces = vec!["eth0".to_string(), "eth1".to_string()];
        assert_eq!(interfaces.interfaces().unwrap(), vec!["eth0", "eth1"]);
    }
}
