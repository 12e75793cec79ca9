//! `[name, code]` rows and the scan shared by every name/code resolver

use serde::{Deserialize, Serialize};

/// One row of a reference table: a country or a subdivision
///
/// On disk a record is a two-element array, `["New Hampshire", "NH"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Record {
    /// Display name, e.g. `"Canada"`
    pub name: String,
    /// Code, e.g. `"CA"`
    pub code: String,
}

impl Record {
    /// Create a record from a name and a code
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Value stored at `field`
    #[inline]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Code => &self.code,
        }
    }
}

impl From<(String, String)> for Record {
    fn from((name, code): (String, String)) -> Self {
        Self { name, code }
    }
}

impl From<Record> for (String, String) {
    fn from(record: Record) -> Self {
        (record.name, record.code)
    }
}

/// Column selector for [`search`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The name column
    Name,
    /// The code column
    Code,
}

/// Return the `retrieve` column of the first record whose `matching` column equals `value`
///
/// Comparison is exact and case-sensitive. Records are visited in load order,
/// so earlier duplicates shadow later ones.
pub fn search<'a>(
    records: &'a [Record],
    value: &str,
    matching: Field,
    retrieve: Field,
) -> Option<&'a str> {
    records
        .iter()
        .find(|record| record.get(matching) == value)
        .map(|record| record.get(retrieve))
}
