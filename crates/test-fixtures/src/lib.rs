//! Test fixture loader for StayzUp badge catalogs and other JSON datasets.
//!
//! Fixtures live in `test-fixtures/` at the workspace root.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// One badge definition as stored in the catalog fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct BadgeFixture {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub condition_type: String,
    pub condition_value: i64,
}

/// The default badge catalog (`badges/catalog.json`).
pub fn badge_catalog() -> Vec<BadgeFixture> {
    load_fixture("badges/catalog.json")
}
