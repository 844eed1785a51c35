//! Layered configuration for the `ethstat` binary.
//!
//! Values come from, lowest precedence first: built-in defaults, an optional
//! TOML file, `ETHSTAT_*` environment variables, then command-line flags
//! (applied by the caller).
//!
//! ```toml
//! capture_dir = "/var/lib/ethstat/captures"
//! interfaces = ["eth0", "eth1"]
//! on_error = "fail"
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use ethstat_collector::SourceErrorPolicy;
use serde::Deserialize;

/// What to do when an interface's capture file is missing or unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Abort the collection pass.
    Fail,
    /// Leave the interface out and keep going.
    #[default]
    Skip,
}

impl From<OnError> for SourceErrorPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Fail => SourceErrorPolicy::Fail,
            OnError::Skip => SourceErrorPolicy::Skip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `<interface>.stats` and `<interface>.info` captures.
    pub capture_dir: PathBuf,
    /// Interfaces to report on; empty means every interface with a capture.
    pub interfaces: Vec<String>,
    pub on_error: OnError,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capture_dir: PathBuf::from("captures"),
            interfaces: Vec::new(),
            on_error: OnError::default(),
        }
    }
}

impl Settings {
    /// Load settings from an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(
                Environment::with_prefix("ETHSTAT")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("interfaces"),
            )
            .build()?
            .try_deserialize()
    }
}
