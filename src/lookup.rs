//! Country and subdivision lookups
//!
//! [`RegionData`] owns the configuration and the [`DataStore`] cache. All
//! lookups are read-only; the only state they touch is the lazy load of a
//! table on first use.
//!
//! Per-record misses return `Ok(None)`. Asking for the subdivisions of a
//! country that is unknown, or that has no subdivision data, is an error:
//! [`RegionError::NonexistentCountry`] and [`RegionError::StatesNotSupported`]
//! respectively.

use crate::config::Config;
use crate::error::{RegionError, Result};
use crate::record::{search, Field, Record};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// Country and subdivision reference data
///
/// # Examples
///
/// ```
/// use regiondata::RegionData;
///
/// let regions = RegionData::default();
///
/// assert_eq!(regions.country_name("CA")?.as_deref(), Some("Canada"));
/// assert_eq!(regions.state_code("Illinois")?.as_deref(), Some("IL"));
/// assert_eq!(regions.state_name_in("ON", "CA")?.as_deref(), Some("Ontario"));
/// assert!(regions.state_code("Atlantis")?.is_none());
/// # Ok::<(), regiondata::RegionError>(())
/// ```
pub struct RegionData {
    default_country: String,
    store: DataStore,
}

impl Default for RegionData {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl RegionData {
    /// Create an instance from `config`. No data is read until the first lookup.
    pub fn new(config: Config) -> Self {
        Self {
            default_country: config.default_country,
            store: DataStore::new(config.data_path),
        }
    }

    /// Current settings
    pub fn config(&self) -> Config {
        Config {
            data_path: self.store.data_path().to_path_buf(),
            default_country: self.default_country.clone(),
        }
    }

    /// The underlying table cache
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Directory tables are loaded from
    pub fn data_path(&self) -> &Path {
        self.store.data_path()
    }

    /// Change the data directory; cached tables are dropped
    pub fn set_data_path(&mut self, data_path: impl Into<PathBuf>) {
        self.store.set_data_path(data_path);
    }

    /// Country used by subdivision lookups that don't name one
    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    /// Change the default country. The cache is unaffected.
    pub fn set_default_country(&mut self, code: impl Into<String>) {
        self.default_country = code.into();
    }

    /// Load both tables now, surfacing any load error
    pub fn preload(&self) -> Result<()> {
        self.store.preload()
    }

    /// Country name for a code: `country_name("TV")` is `"Tuvalu"`
    pub fn country_name(&self, code: &str) -> Result<Option<String>> {
        let countries = self.store.countries()?;
        Ok(search(&countries, code, Field::Code, Field::Name).map(str::to_string))
    }

    /// Country code for a name: `country_code("Canada")` is `"CA"`
    pub fn country_code(&self, name: &str) -> Result<Option<String>> {
        let countries = self.store.countries()?;
        Ok(search(&countries, name, Field::Name, Field::Code).map(str::to_string))
    }

    /// All country codes, in file order
    pub fn country_codes(&self) -> Result<Vec<String>> {
        self.country_column(Field::Code)
    }

    /// All country names, in file order
    pub fn country_names(&self) -> Result<Vec<String>> {
        self.country_column(Field::Name)
    }

    fn country_column(&self, field: Field) -> Result<Vec<String>> {
        let countries = self.store.countries()?;
        Ok(countries
            .iter()
            .map(|record| record.get(field).to_string())
            .collect())
    }

    /// Subdivision name for a code in the default country
    pub fn state_name(&self, code: &str) -> Result<Option<String>> {
        self.state_name_in(code, &self.default_country)
    }

    /// Subdivision name for a code in `country`: `state_name_in("NH", "US")` is `"New Hampshire"`
    pub fn state_name_in(&self, code: &str, country: &str) -> Result<Option<String>> {
        self.search_states(country, code, Field::Code, Field::Name)
    }

    /// Subdivision code for a name in the default country
    pub fn state_code(&self, name: &str) -> Result<Option<String>> {
        self.state_code_in(name, &self.default_country)
    }

    /// Subdivision code for a name in `country`: `state_code_in("Illinois", "US")` is `"IL"`
    pub fn state_code_in(&self, name: &str, country: &str) -> Result<Option<String>> {
        self.search_states(country, name, Field::Name, Field::Code)
    }

    /// Subdivision names of the default country, in file order
    pub fn state_names(&self) -> Result<Vec<String>> {
        self.state_names_in(&self.default_country)
    }

    /// Subdivision names of `country`, in file order
    pub fn state_names_in(&self, country: &str) -> Result<Vec<String>> {
        self.state_column(country, Field::Name)
    }

    /// Subdivision codes of the default country, in file order
    pub fn state_codes(&self) -> Result<Vec<String>> {
        self.state_codes_in(&self.default_country)
    }

    /// Subdivision codes of `country`, in file order
    pub fn state_codes_in(&self, country: &str) -> Result<Vec<String>> {
        self.state_column(country, Field::Code)
    }

    /// Subdivisions of the default country
    pub fn states(&self) -> Result<Vec<Record>> {
        self.states_in(&self.default_country)
    }

    /// Subdivisions of `country` as `(name, code)` records, in file order
    ///
    /// # Errors
    ///
    /// - [`RegionError::NonexistentCountry`] if `country` is not a known country code
    /// - [`RegionError::StatesNotSupported`] if it is, but has no subdivision data
    /// - a load error if either table cannot be read
    pub fn states_in(&self, country: &str) -> Result<Vec<Record>> {
        self.with_states(country, |records| records.to_vec())
    }

    /// Whether subdivision data exists for `country`
    ///
    /// Never fails with [`RegionError::NonexistentCountry`] or
    /// [`RegionError::StatesNotSupported`]; only a load error is possible.
    pub fn states_supported(&self, country: &str) -> Result<bool> {
        Ok(self.store.subdivisions()?.contains_key(country))
    }

    fn search_states(
        &self,
        country: &str,
        value: &str,
        matching: Field,
        retrieve: Field,
    ) -> Result<Option<String>> {
        self.with_states(country, |records| {
            search(records, value, matching, retrieve).map(str::to_string)
        })
    }

    fn state_column(&self, country: &str, field: Field) -> Result<Vec<String>> {
        self.with_states(country, |records| {
            records
                .iter()
                .map(|record| record.get(field).to_string())
                .collect()
        })
    }

    /// Run `f` over the subdivision records of a known, supported country
    fn with_states<T>(&self, country: &str, f: impl FnOnce(&[Record]) -> T) -> Result<T> {
        let countries = self.store.countries()?;
        if !countries.iter().any(|record| record.code == country) {
            return Err(RegionError::NonexistentCountry(country.to_string()));
        }

        let subdivisions = self.store.subdivisions()?;
        match subdivisions.get(country) {
            Some(records) => Ok(f(records)),
            None => Err(RegionError::StatesNotSupported(country.to_string())),
        }
    }
}
