use std::io;

use thiserror::Error;

use super::path_check::PathCheckResult;

/// Library-wide error type for filewright operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Path failed validation; carries the full check result.
    #[error("Invalid path '{}': {}", .0.path, .0.issue_summary())]
    InvalidPath(PathCheckResult),

    /// Structure kind is not in the catalog.
    #[error("Unknown structure kind '{kind}'. Available: {available}")]
    UnknownStructureKind { kind: String, available: String },

    /// Target file already exists and the conflict policy is `fail`.
    #[error("File already exists: {0} (on_conflict = fail)")]
    FileExists(String),

    /// File not found under the output root.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Layout rules file failed to parse or validate.
    #[error("Invalid layout rules in {path}: {reason}")]
    InvalidRules { path: String, reason: String },

    /// Expected-type name is not recognized.
    #[error("Invalid expected type '{0}': must be one of python, javascript, config, any")]
    InvalidExpectedType(String),

    /// Conflict policy name is not recognized.
    #[error("Invalid conflict policy '{0}': must be one of overwrite, skip, fail")]
    InvalidConflictPolicy(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON parsing error (batch file specs).
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
