//! Lookup configuration
//!
//! ```rust
//! use regiondata::Config;
//!
//! let config = Config::default().with_default_country("CA");
//! assert_eq!(config.default_country, "CA");
//! ```

use crate::error::{RegionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Country code used when a subdivision lookup names no country
pub const DEFAULT_COUNTRY: &str = "US";

/// Data directory bundled with the crate
///
/// This is the crate's source directory as seen at build time. A binary
/// deployed to another machine won't find it there and must configure its
/// own `data_path`.
pub fn bundled_data_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

/// Settings for a [`RegionData`](crate::RegionData) instance
///
/// Missing fields fall back to their defaults when deserialized, so the
/// struct can sit under its own key in a larger application config. Unknown
/// fields are rejected, which rules out `#[serde(flatten)]` embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding `countries.json` and `states/`
    pub data_path: PathBuf,
    /// Country for subdivision lookups that omit one
    pub default_country: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: bundled_data_path(),
            default_country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl Config {
    /// Set the data directory
    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    /// Set the default country code
    pub fn with_default_country(mut self, code: impl Into<String>) -> Self {
        self.default_country = code.into();
        self
    }

    /// Read a JSON config file
    ///
    /// A relative `data_path` is resolved against the directory containing
    /// the config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RegionError::io(path, e))?;
        let mut config: Config = serde_json::from_str(&text)
            .map_err(|e| RegionError::Config(format!("{}: {}", path.display(), e)))?;

        if config.data_path.is_relative() {
            if let Some(parent) = path.parent() {
                config.data_path = parent.join(&config.data_path);
            }
        }
        Ok(config)
    }
}
