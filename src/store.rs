//! Lazily loaded, invalidatable cache of the two reference tables
//!
//! Layout of a data directory:
//!
//! ```text
//! <data_path>/
//!   countries.json          [["Afghanistan", "AF"], ...]
//!   states/
//!     US.json               [["Alabama", "AL"], ...]
//!     ca.json.gz            keys are upper-cased, gzip is allowed
//! ```
//!
//! Each table is read at most once per data path. Changing the path drops
//! both tables; they are reloaded on the next access.

use crate::error::{RegionError, Result};
use crate::file_reader::{self, JSON_EXT, JSON_GZ_EXT};
use crate::record::Record;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Stem of the country table file
const COUNTRIES_STEM: &str = "countries";

/// Subdirectory holding one subdivision table per country
const STATES_DIR: &str = "states";

/// Subdivision records keyed by upper-case country code
///
/// A key is present exactly when that country has subdivision data.
pub type SubdivisionTable = FxHashMap<String, Vec<Record>>;

#[derive(Default)]
struct TableCache {
    countries: Option<Rc<[Record]>>,
    subdivisions: Option<Rc<SubdivisionTable>>,
}

/// Reference data store
///
/// Loads go through `&self`; the cache lives in a `RefCell`, so a store is
/// confined to one thread.
pub struct DataStore {
    data_path: PathBuf,
    cache: RefCell<TableCache>,
}

impl DataStore {
    /// Create a store reading from `data_path`. Nothing is loaded yet.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            cache: RefCell::new(TableCache::default()),
        }
    }

    /// Directory tables are loaded from
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Point the store at a new directory and drop both cached tables
    ///
    /// Invalidation is unconditional, even if `data_path` is unchanged.
    pub fn set_data_path(&mut self, data_path: impl Into<PathBuf>) {
        self.data_path = data_path.into();
        self.invalidate();
    }

    /// Drop both cached tables; the next access reloads them
    pub fn invalidate(&self) {
        trace!(path = %self.data_path.display(), "invalidating reference tables");
        *self.cache.borrow_mut() = TableCache::default();
    }

    /// Whether the country table is currently cached
    pub fn countries_loaded(&self) -> bool {
        self.cache.borrow().countries.is_some()
    }

    /// Whether the subdivision table is currently cached
    pub fn subdivisions_loaded(&self) -> bool {
        self.cache.borrow().subdivisions.is_some()
    }

    /// The country table, in file order, loading it on first access
    pub fn countries(&self) -> Result<Rc<[Record]>> {
        if let Some(countries) = &self.cache.borrow().countries {
            return Ok(Rc::clone(countries));
        }

        let countries: Rc<[Record]> = load_countries(&self.data_path)?.into();
        self.cache.borrow_mut().countries = Some(Rc::clone(&countries));
        Ok(countries)
    }

    /// The subdivision table, loading every country's file on first access
    pub fn subdivisions(&self) -> Result<Rc<SubdivisionTable>> {
        if let Some(subdivisions) = &self.cache.borrow().subdivisions {
            return Ok(Rc::clone(subdivisions));
        }

        let subdivisions = Rc::new(load_subdivisions(&self.data_path)?);
        self.cache.borrow_mut().subdivisions = Some(Rc::clone(&subdivisions));
        Ok(subdivisions)
    }

    /// Load both tables now instead of on first lookup
    pub fn preload(&self) -> Result<()> {
        self.countries()?;
        self.subdivisions()?;
        Ok(())
    }
}

/// Read and parse a single `[name, code]` table
pub fn load_table(path: &Path) -> Result<Vec<Record>> {
    let reader = file_reader::open(path).map_err(|e| RegionError::io(path, e))?;
    serde_json::from_reader(reader).map_err(|e| {
        // A corrupt gzip stream shows up as an I/O error inside the parser
        if e.is_io() {
            RegionError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        } else {
            RegionError::parse(path, e)
        }
    })
}

fn load_countries(data_path: &Path) -> Result<Vec<Record>> {
    let path = file_reader::resolve(data_path, COUNTRIES_STEM);
    let countries = load_table(&path)?;
    debug!(path = %path.display(), count = countries.len(), "loaded country table");
    Ok(countries)
}

fn load_subdivisions(data_path: &Path) -> Result<SubdivisionTable> {
    let dir = data_path.join(STATES_DIR);
    let mut table = SubdivisionTable::default();

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "no subdivision directory");
            return Ok(table);
        }
        Err(e) => return Err(RegionError::io(&dir, e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RegionError::io(&dir, e))?;
        if entry.path().is_file() {
            files.push(entry.file_name());
        }
    }
    files.sort();

    for file_name in files {
        let Some(name) = file_name.to_str() else {
            warn!(file = ?file_name, "non UTF-8 subdivision file ignored");
            continue;
        };
        let Some(key) = country_key(name) else {
            continue;
        };
        if table.contains_key(&key) {
            warn!(file = name, country = %key, "duplicate subdivision file ignored");
            continue;
        }
        let records = load_table(&dir.join(name))?;
        table.insert(key, records);
    }

    debug!(dir = %dir.display(), countries = table.len(), "loaded subdivision tables");
    Ok(table)
}

/// Country code for a subdivision file name
///
/// Strips a `.json` or `.json.gz` extension (ASCII case-insensitive) and
/// upper-cases the stem. Any other name yields `None`.
///
/// ```
/// use regiondata::store::country_key;
///
/// assert_eq!(country_key("us.json").as_deref(), Some("US"));
/// assert_eq!(country_key("Ca.JSON.gz").as_deref(), Some("CA"));
/// assert_eq!(country_key("README.md"), None);
/// ```
pub fn country_key(file_name: &str) -> Option<String> {
    let stem = strip_suffix_ignore_case(file_name, JSON_GZ_EXT)
        .or_else(|| strip_suffix_ignore_case(file_name, JSON_EXT))?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_ascii_uppercase())
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if !s.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = s.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
