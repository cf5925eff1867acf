use serde::{Deserialize, Serialize};

use super::error::AppError;
use super::ExpectedType;

/// One file in a batch write request.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSpec {
    pub path: String,
    pub content: String,
    pub expected: ExpectedType,
    pub description: Option<String>,
}

#[derive(Deserialize)]
struct RawFileSpec {
    path: String,
    content: String,
    #[serde(default)]
    expected: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Parse a JSON array of file specs.
///
/// The accepted shape is `[{"path", "content", "expected"?, "description"?}]`.
/// A missing `expected` accepts any registered category. Paths are not
/// validated here; classification happens per entry during the batch run
/// so one bad path cannot reject the whole request.
pub fn parse_file_specs(content: &str) -> Result<Vec<FileSpec>, AppError> {
    let raw: Vec<RawFileSpec> = serde_json::from_str(content)?;
    let mut specs = Vec::with_capacity(raw.len());
    for entry in raw {
        let expected = match entry.expected.as_deref() {
            Some(name) => ExpectedType::from_name(name)?,
            None => ExpectedType::default(),
        };
        specs.push(FileSpec {
            path: entry.path,
            content: entry.content,
            expected,
            description: entry.description,
        });
    }
    Ok(specs)
}

/// One batch entry that was rejected or could not be written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedSpec {
    pub path: String,
    pub reason: String,
}

/// Aggregate outcome of a batch write. Entries land in exactly one of
/// `created`, `skipped`, or `failed`; `warnings` accumulate across all of
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<FailedSpec>,
    pub warnings: Vec<String>,
}

impl BatchResult {
    pub fn record_created(&mut self, path: &str) {
        self.created.push(path.to_string());
    }

    pub fn record_skipped(&mut self, path: &str) {
        self.skipped.push(path.to_string());
    }

    pub fn record_failure(&mut self, path: &str, reason: impl Into<String>) {
        self.failed.push(FailedSpec { path: path.to_string(), reason: reason.into() });
    }

    pub fn record_warning(&mut self, path: &str, warning: &str) {
        self.warnings.push(format!("{}: {}", path, warning));
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// One-line summary for terminal output.
    pub fn summary(&self) -> String {
        format!(
            "{} created, {} skipped, {} failed",
            self.created.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }
}
