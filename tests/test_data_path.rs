//! Data directory handling: cache invalidation, gzip tables, load failures

use flate2::write::GzEncoder;
use flate2::Compression;
use regiondata::{Config, RegionData, RegionError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Route load/invalidation events to the test output (`RUST_LOG=regiondata=trace`)
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn write(dir: &Path, rel: &str, contents: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn write_gz(dir: &Path, rel: &str, contents: &str) {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, encoder.finish().unwrap()).unwrap();
}

fn data_dir(countries: &str, us_states: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "countries.json", countries);
    write(dir.path(), "states/us.json", us_states);
    dir
}

fn open(dir: &TempDir) -> RegionData {
    init_tracing();
    RegionData::new(Config::default().with_data_path(dir.path()))
}

#[test]
fn test_changing_path_reloads() {
    let old = data_dir(
        r#"[["United States","US"],["Freedonia","FD"]]"#,
        r#"[["Ohio","OH"]]"#,
    );
    let new = data_dir(
        r#"[["United States of America","US"]]"#,
        r#"[["Ohio","O"]]"#,
    );

    let mut regions = open(&old);
    assert_eq!(
        regions.country_name("US").unwrap().as_deref(),
        Some("United States")
    );
    assert_eq!(regions.state_code("Ohio").unwrap().as_deref(), Some("OH"));

    regions.set_data_path(new.path());
    assert!(!regions.store().countries_loaded());
    assert!(!regions.store().subdivisions_loaded());
    assert_eq!(regions.data_path(), new.path());

    assert_eq!(
        regions.country_name("US").unwrap().as_deref(),
        Some("United States of America")
    );
    assert_eq!(regions.country_name("FD").unwrap(), None);
    assert_eq!(regions.state_code("Ohio").unwrap().as_deref(), Some("O"));
}

#[test]
fn test_same_path_still_invalidates() {
    let dir = data_dir(r#"[["United States","US"]]"#, r#"[["Ohio","OH"]]"#);
    let mut regions = open(&dir);
    assert_eq!(regions.country_codes().unwrap(), vec!["US"]);

    write(dir.path(), "countries.json", r#"[["Canada","CA"],["United States","US"]]"#);
    // Still cached
    assert_eq!(regions.country_codes().unwrap(), vec!["US"]);

    regions.set_data_path(dir.path());
    assert_eq!(regions.country_codes().unwrap(), vec!["CA", "US"]);
}

#[test]
fn test_default_country_change_keeps_cache() {
    let dir = data_dir(r#"[["United States","US"]]"#, r#"[["Ohio","OH"]]"#);
    let mut regions = open(&dir);
    regions.preload().unwrap();

    regions.set_default_country("CA");
    assert!(regions.store().countries_loaded());
    assert!(regions.store().subdivisions_loaded());
}

#[test]
fn test_gzip_tables() {
    let dir = TempDir::new().unwrap();
    write_gz(
        dir.path(),
        "countries.json.gz",
        r#"[["Canada","CA"],["Mexico","MX"]]"#,
    );
    write_gz(dir.path(), "states/Ca.JSON.GZ", r#"[["Yukon","YT"]]"#);
    write(dir.path(), "states/MX.json", r#"[["Sonora","SON"]]"#);

    let regions = open(&dir);
    assert_eq!(regions.country_code("Mexico").unwrap().as_deref(), Some("MX"));
    assert_eq!(regions.state_name_in("YT", "CA").unwrap().as_deref(), Some("Yukon"));
    assert_eq!(regions.state_codes_in("MX").unwrap(), vec!["SON"]);
}

#[test]
fn test_missing_country_table() {
    let dir = TempDir::new().unwrap();
    let regions = open(&dir);

    match regions.country_codes() {
        Err(RegionError::Io { path, .. }) => assert!(path.ends_with("countries.json")),
        other => panic!("expected I/O error, got {:?}", other),
    }
    // The missing country table also fails subdivision lookups
    assert!(regions.states_in("US").unwrap_err().is_load_error());
}

#[test]
fn test_malformed_country_table() {
    let dir = data_dir(r#"{"United States": "US"}"#, "[]");
    let regions = open(&dir);
    assert!(matches!(
        regions.country_name("US"),
        Err(RegionError::Parse { .. })
    ));
}

#[test]
fn test_corrupt_gzip_is_load_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "countries.json.gz", "definitely not gzip");
    let regions = open(&dir);
    assert!(regions.country_codes().unwrap_err().is_load_error());
}

#[test]
fn test_malformed_subdivision_table_fails_states_supported() {
    let dir = data_dir(r#"[["United States","US"]]"#, r#"[["Ohio","OH","extra"]]"#);
    let regions = open(&dir);
    assert!(matches!(
        regions.states_supported("US"),
        Err(RegionError::Parse { .. })
    ));
    // Country lookups do not touch the subdivision table
    assert_eq!(regions.country_codes().unwrap(), vec!["US"]);
}

#[test]
fn test_no_states_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "countries.json", r#"[["United States","US"]]"#);
    let regions = open(&dir);
    assert!(!regions.states_supported("US").unwrap());
    assert_eq!(
        regions.states().unwrap_err(),
        RegionError::StatesNotSupported("US".to_string())
    );
}

#[test]
fn test_config_file() {
    let dir = data_dir(r#"[["United States","US"]]"#, r#"[["Ohio","OH"]]"#);
    write(
        dir.path(),
        "regions.json",
        r#"{"data_path": ".", "default_country": "US"}"#,
    );

    let config = Config::from_json_file(dir.path().join("regions.json")).unwrap();
    let regions = RegionData::new(config);
    assert_eq!(regions.state_name("OH").unwrap().as_deref(), Some("Ohio"));
}
