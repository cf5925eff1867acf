//! Settings file discovery and run configuration resolution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, ConflictPolicy, DEFAULT_OUTPUT_ROOT, Settings, parse_settings_content,
};

/// Name of the optional settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "filewright.toml";

/// Load `filewright.toml` from `dir`. A missing file yields the defaults.
pub fn load_settings(dir: &Path) -> Result<Settings, AppError> {
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(&path)?;
    parse_settings_content(&content)
        .map_err(|err| AppError::config_error(format!("{}: {}", path.display(), err)))
}

/// Effective configuration for one invocation, after merging CLI flags over
/// the settings file over the built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Directory all writes are scoped under.
    pub root: String,
    /// Replacement rule table, when the settings file names one.
    pub rules_path: Option<PathBuf>,
    /// Policy applied when a write target already exists.
    pub on_conflict: ConflictPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_OUTPUT_ROOT.to_string(),
            rules_path: None,
            on_conflict: ConflictPolicy::default(),
        }
    }
}

/// Merge CLI flags over settings-file values over defaults.
pub fn resolve_run_config(
    settings: &Settings,
    root_flag: Option<&str>,
    conflict_flag: Option<ConflictPolicy>,
) -> RunConfig {
    let root = root_flag
        .map(str::to_string)
        .or_else(|| settings.output.root.clone())
        .unwrap_or_else(|| DEFAULT_OUTPUT_ROOT.to_string());
    let on_conflict =
        conflict_flag.or(settings.output.on_conflict).unwrap_or_default();

    RunConfig { root, rules_path: settings.rules.path.clone(), on_conflict }
}
