//! Runtime configuration read from the environment.

use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "sample.json";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Snapshot file the driver is seeded from.
    pub data_path: PathBuf,
    /// Address the HTTP API binds to.
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Load from `FOLDER_HUB_DATA` and `FOLDER_HUB_ADDR`, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_path: lookup("FOLDER_HUB_DATA")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            listen_addr: lookup("FOLDER_HUB_ADDR").unwrap_or(defaults.listen_addr),
        }
    }

    /// Apply command line overrides on top of the environment.
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, listen_addr: Option<String>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(addr) = listen_addr {
            self.listen_addr = addr;
        }
        self
    }
}
