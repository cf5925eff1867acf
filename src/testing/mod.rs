//! Shared fixtures for crate-internal tests.

use tempfile::TempDir;

use crate::app::AppContext;
use crate::domain::{ConflictPolicy, LayoutRules, parse_rules_content};
use crate::services::{AssetLayoutCatalog, FilesystemOutputStore};

/// The built-in rule table, parsed fresh for each test.
pub fn default_rules() -> LayoutRules {
    parse_rules_content(include_str!("../assets/layout/rules.toml"))
        .expect("built-in rules must parse")
}

/// Context over a temporary output root with the built-in catalog and the
/// default conflict policy. Keep the `TempDir` guard alive for the duration
/// of the test.
pub fn temp_context() -> (TempDir, AppContext<FilesystemOutputStore, AssetLayoutCatalog>) {
    temp_context_with(ConflictPolicy::default())
}

/// Context over a temporary output root with an explicit conflict policy.
pub fn temp_context_with(
    policy: ConflictPolicy,
) -> (TempDir, AppContext<FilesystemOutputStore, AssetLayoutCatalog>) {
    let dir = TempDir::new().expect("failed to create temp output root");
    let store = FilesystemOutputStore::new(dir.path().to_path_buf());
    let catalog = AssetLayoutCatalog::load().expect("built-in catalog must load");
    (dir, AppContext::new(store, catalog, policy))
}
