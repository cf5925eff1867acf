use std::path::PathBuf;

use serde::Deserialize;

use super::conflict::ConflictPolicy;
use super::error::AppError;

/// Output root used when neither the CLI nor the settings file names one.
pub const DEFAULT_OUTPUT_ROOT: &str = "outputs";

/// Workspace settings loaded from `filewright.toml`.
///
/// Every field is optional; the CLI flag wins over the file, and the file
/// wins over the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub rules: RulesSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory all writes are scoped under.
    pub root: Option<String>,
    /// Policy applied when a write target already exists.
    pub on_conflict: Option<ConflictPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RulesSettings {
    /// Path to a rule table that replaces the built-in one.
    pub path: Option<PathBuf>,
}

/// Parse and validate settings file content.
pub fn parse_settings_content(content: &str) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(content)?;

    if let Some(root) = settings.output.root.as_deref()
        && root.is_empty()
    {
        return Err(AppError::Configuration(
            "settings key 'output.root' must not be empty".to_string(),
        ));
    }
    if let Some(path) = settings.rules.path.as_deref()
        && path.as_os_str().is_empty()
    {
        return Err(AppError::Configuration(
            "settings key 'rules.path' must not be empty".to_string(),
        ));
    }

    Ok(settings)
}
