//! Test fixture loading utilities

use std::io::Write;
use std::path::PathBuf;

use influence_core::{fit_transform, Catalog, InfluencerRecord, StandardizedCatalog};

/// Get the path to a fixture file
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Write a CSV body under the default header into a temp file
#[allow(dead_code)]
pub fn temp_csv(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    write!(file, "username,followers,Average views\n{}", body).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

/// Standardize a catalog built from `(username, followers, average_views)`
#[allow(dead_code)]
pub fn standardized(rows: &[(&str, f64, f64)]) -> StandardizedCatalog {
    let records = rows
        .iter()
        .map(|&(name, followers, views)| InfluencerRecord::new(name, followers, views))
        .collect();
    fit_transform(&Catalog::from_records(records))
        .expect("fixture catalog standardizes")
        .0
}

/// Send library logs to the test writer; safe to call from every test
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
