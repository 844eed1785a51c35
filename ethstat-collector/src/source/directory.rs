//! Capture-directory dump source.
//!
//! Reads ethtool output saved to disk, one file per interface and dump kind:
//!
//! ```text
//! captures/
//!   eth0.stats   # ethtool -S eth0
//!   eth0.info    # ethtool eth0
//!   eth1.stats
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::{DumpKind, DumpSource, InterfaceEnumerator};
use crate::CollectError;

/// A source that reads captured dumps from a directory.
///
/// Every file named `<interface>.stats` or `<interface>.info` names an
/// interface; other files are ignored.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Create a source reading from `dir`.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the capture directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the capture file for an interface's dump.
    pub fn path_for(&self, interface: &str, kind: DumpKind) -> PathBuf {
        self.dir.join(format!("{}.{}", interface, kind.extension()))
    }
}

impl InterfaceEnumerator for DirectorySource {
    fn interfaces(&self) -> Result<Vec<String>, CollectError> {
        let entries = fs::read_dir(&self.dir)
            .map_err(|e| CollectError::Enumerate(format!("{}: {}", self.dir.display(), e)))?;

        let mut interfaces = BTreeSet::new();
        for entry in entries {
            let path = entry
                .map_err(|e| CollectError::Enumerate(format!("{}: {}", self.dir.display(), e)))?
                .path();
            let is_capture = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(DumpKind::from_extension)
                .is_some();
            if !is_capture || !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                interfaces.insert(stem.to_string());
            }
        }

        Ok(interfaces.into_iter().collect())
    }
}

impl DumpSource for DirectorySource {
    fn dump(&self, interface: &str, kind: DumpKind) -> Result<String, CollectError> {
        let path = self.path_for(interface, kind);
        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CollectError::MissingDump {
                    interface: interface.to_string(),
                    kind,
                }
            } else {
                CollectError::Dump {
                    interface: interface.to_string(),
                    kind,
                    message: format!("{}: {}", path.display(), e),
                }
            }
        })
    }
}
