//! Environment configuration for the server binary.
//!
//! Consolidates the `PURITY_*` variable reads so the binary and the tests
//! agree on defaults.

use crate::controller::Profile;

/// Read `PURITY_PORT` (default 9000).
pub fn server_port() -> u16 {
    std::env::var("PURITY_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(9000)
}

/// Read `PURITY_CATALOG_PATH` (default `data/catalog.sample.json`).
pub fn catalog_path() -> String {
    std::env::var("PURITY_CATALOG_PATH").unwrap_or_else(|_| "data/catalog.sample.json".to_string())
}

/// Read `PURITY_BASE_URL`: origin + path of the hosting page, used as the
/// share-link base. Any query suffix is stripped.
pub fn base_url() -> String {
    let raw = std::env::var("PURITY_BASE_URL")
        .unwrap_or_else(|_| crate::constants::DEFAULT_BASE_URL.to_string());
    match raw.split_once('?') {
        Some((base, _)) => base.to_string(),
        None => raw,
    }
}

/// Read `PURITY_PROFILE`: `shareable` (default) or `live-page`.
pub fn profile() -> Profile {
    match std::env::var("PURITY_PROFILE").as_deref() {
        Ok("live-page") => Profile::live_page(),
        _ => Profile::shareable(),
    }
}
