/// Error types for the regiondata library
use std::fmt;
use std::path::{Path, PathBuf};

/// Result type alias for reference data operations
pub type Result<T> = std::result::Result<T, RegionError>;

/// Main error type for reference data operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// A data file is missing or unreadable
    Io {
        /// File that failed to open or read
        path: PathBuf,
        /// Underlying I/O error text
        message: String,
    },

    /// A data file was read but its contents are not a table of `[name, code]` rows
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser error text
        message: String,
    },

    /// The country code is not present in the country table
    NonexistentCountry(String),

    /// The country exists but has no subdivision data
    StatesNotSupported(String),

    /// Invalid configuration file
    Config(String),
}

impl RegionError {
    pub(crate) fn io(path: &Path, err: std::io::Error) -> Self {
        RegionError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub(crate) fn parse(path: &Path, err: serde_json::Error) -> Self {
        RegionError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// True for failures to load the source data, as opposed to caller usage errors
    pub fn is_load_error(&self) -> bool {
        matches!(self, RegionError::Io { .. } | RegionError::Parse { .. })
    }
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::Io { path, message } => {
                write!(f, "I/O error reading {}: {}", path.display(), message)
            }
            RegionError::Parse { path, message } => {
                write!(f, "Malformed data in {}: {}", path.display(), message)
            }
            RegionError::NonexistentCountry(code) => write!(f, "Nonexistent country: {}", code),
            RegionError::StatesNotSupported(code) => {
                write!(f, "States not supported for country: {}", code)
            }
            RegionError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for RegionError {}
