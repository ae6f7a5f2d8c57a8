//! Shared fixtures for the integration tests under `tests/`.

use tempfile::TempDir;
use wt_core::SettingsStore;

/// Settings store rooted in a fresh temporary `WTApp` directory.
///
/// Keep the returned `TempDir` alive for as long as the store is used.
pub fn temp_store() -> (TempDir, SettingsStore) {
    let dir = TempDir::new().expect("create temp dir");
    let store = SettingsStore::open(&dir.path().join("WTApp")).expect("open settings store");
    (dir, store)
}

pub fn cities(names: &[&str]) -> Vec<String> {
    names.iter().map(|c| c.to_string()).collect()
}
