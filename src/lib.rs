//! regiondata - Country and Subdivision Reference Tables
//!
//! Bidirectional name/code lookups for countries and their first-level
//! administrative subdivisions (states, provinces, regions), backed by plain
//! JSON tables that are loaded on first use and cached for the life of the
//! process.
//!
//! # Quick Start
//!
//! ```rust
//! use regiondata::{RegionData, RegionError};
//!
//! // Uses the bundled data set and "US" as the default country
//! let regions = RegionData::default();
//!
//! assert_eq!(regions.country_code("Canada")?.as_deref(), Some("CA"));
//! assert_eq!(regions.state_name("NH")?.as_deref(), Some("New Hampshire"));
//!
//! // A missing record is not an error
//! assert_eq!(regions.country_name("ZZ")?, None);
//!
//! // An unknown or unsupported country is
//! assert!(matches!(regions.states_in("ZZ"), Err(RegionError::NonexistentCountry(_))));
//! assert!(matches!(regions.states_in("AQ"), Err(RegionError::StatesNotSupported(_))));
//! assert!(!regions.states_supported("AQ")?);
//! # Ok::<(), RegionError>(())
//! ```
//!
//! # Data Layout
//!
//! ```text
//! <data_path>/countries.json        [["Afghanistan", "AF"], ...]
//! <data_path>/states/<CODE>.json    [["Alabama", "AL"], ...]
//! ```
//!
//! Either kind of file may be gzip-compressed as `<stem>.json.gz`. The
//! subdivision file name, upper-cased, is the country code it belongs to.
//!
//! # Threading
//!
//! [`RegionData`] caches through a `RefCell` and is not `Sync`. Configure it
//! once at startup and keep it on the thread that uses it.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Lookup configuration
pub mod config;
/// Error types
pub mod error;
pub mod file_reader;
/// Country and subdivision lookups
pub mod lookup;
/// Table rows and the shared name/code scan
pub mod record;
pub mod store;

pub use crate::config::{Config, DEFAULT_COUNTRY};
pub use crate::error::{RegionError, Result};
pub use crate::lookup::RegionData;
pub use crate::record::Record;
pub use crate::store::{DataStore, SubdivisionTable};

/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
