//! Data file reader with automatic gzip decompression
//!
//! Every table can be stored either as plain `<stem>.json` or as
//! `<stem>.json.gz`. The extension decides whether the stream is wrapped in a
//! gzip decoder, so callers never need to know which one is on disk.
//!
//! ```rust,no_run
//! use regiondata::file_reader;
//! use std::io::Read;
//!
//! let mut reader = file_reader::open("data/states/US.json.gz")?;
//! let mut text = String::new();
//! reader.read_to_string(&mut text)?;
//! # Ok::<(), std::io::Error>(())
//! ```

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Buffer size for data file reading
const BUFFER_SIZE: usize = 64 * 1024;

/// Plain table extension
pub const JSON_EXT: &str = ".json";

/// Gzip-compressed table extension
pub const JSON_GZ_EXT: &str = ".json.gz";

/// Open a data file, decompressing it if the name ends in `.gz` (case-insensitive)
///
/// # Errors
///
/// Returns an error if the file doesn't exist or cannot be opened.
/// Invalid gzip data surfaces later, as a read error from the returned reader.
pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    if is_gzip(path) {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(BufReader::with_capacity(BUFFER_SIZE, decoder)))
    } else {
        Ok(Box::new(BufReader::with_capacity(BUFFER_SIZE, file)))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Locate the table named `stem` inside `dir`
///
/// Prefers `<stem>.json` and falls back to `<stem>.json.gz`. When neither
/// exists the plain path is returned so the caller's open error names the
/// file a user would expect to find.
pub fn resolve(dir: &Path, stem: &str) -> PathBuf {
    let plain = dir.join(format!("{}{}", stem, JSON_EXT));
    if plain.is_file() {
        return plain;
    }
    let gz = dir.join(format!("{}{}", stem, JSON_GZ_EXT));
    if gz.is_file() {
        return gz;
    }
    plain
}
