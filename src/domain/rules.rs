use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AppError, Category};

/// Allowed extensions and human-readable role for one project area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaRule {
    /// What this area holds (e.g. "Python backend services").
    pub label: String,
    /// Allowed file extensions, dot-prefixed and lowercase (".py").
    pub extensions: Vec<String>,
}

impl AreaRule {
    /// Whether the (dot-prefixed, lowercase) extension is allowed here.
    pub fn allows(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    /// Comma-joined extension list for messages.
    pub fn extension_list(&self) -> String {
        self.extensions.join(", ")
    }
}

/// Naming conventions for files inside a `tests` subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConvention {
    /// Directory segment that marks a test subtree.
    pub dir_name: String,
    /// Python test files start with this prefix.
    pub python_prefix: String,
    /// JavaScript test files end with one of these suffixes.
    pub javascript_suffixes: Vec<String>,
    /// Exact filenames exempt from the convention (conftest.py, ...).
    pub fixtures: Vec<String>,
}

impl TestConvention {
    /// Whether a filename follows the test naming convention.
    pub fn is_conventional(&self, file_name: &str) -> bool {
        if self.fixtures.iter().any(|fixture| fixture == file_name) {
            return true;
        }
        if file_name.starts_with(&self.python_prefix) && file_name.ends_with(".py") {
            return true;
        }
        self.javascript_suffixes.iter().any(|suffix| file_name.ends_with(suffix))
    }
}

/// The loadable rule table the path validator classifies against.
///
/// A default table ships as an embedded asset; projects may replace it via
/// `[rules] path` in filewright.toml without touching validation logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutRules {
    /// Exact filenames permitted with no directory prefix.
    #[serde(default)]
    pub root_files: Vec<String>,
    /// Well-known filenames valid in any area regardless of extension rules.
    #[serde(default)]
    pub anywhere_files: Vec<String>,
    /// Leading directory segment -> area rule.
    #[serde(default)]
    pub areas: BTreeMap<String, AreaRule>,
    /// Extension category -> dot-prefixed extensions.
    #[serde(default)]
    pub categories: BTreeMap<Category, Vec<String>>,
    /// Test-subtree naming convention; absent disables the advisory check.
    #[serde(default)]
    pub tests: Option<TestConvention>,
}

impl LayoutRules {
    /// Rule for a leading directory segment, if it is a known area.
    pub fn area(&self, name: &str) -> Option<&AreaRule> {
        self.areas.get(name)
    }

    /// Whether the filename may live at the root level.
    pub fn is_root_file(&self, file_name: &str) -> bool {
        self.root_files.iter().any(|name| name == file_name)
    }

    /// Whether the filename is accepted in any area.
    pub fn is_anywhere_file(&self, file_name: &str) -> bool {
        self.anywhere_files.iter().any(|name| name == file_name)
    }

    /// Category of a (dot-prefixed, lowercase) extension, if registered.
    pub fn category_of(&self, extension: &str) -> Option<Category> {
        self.categories.iter().find_map(|(category, extensions)| {
            extensions.iter().any(|ext| ext.eq_ignore_ascii_case(extension)).then_some(*category)
        })
    }

    /// First area other than `exclude` whose rule allows the extension.
    ///
    /// Drives "move this file to frontend/" suggestions; BTreeMap ordering
    /// keeps the choice deterministic.
    pub fn area_allowing(&self, extension: &str, exclude: &str) -> Option<&str> {
        self.areas
            .iter()
            .find(|(name, rule)| name.as_str() != exclude && rule.allows(extension))
            .map(|(name, _)| name.as_str())
    }

    /// Structural validation of a loaded table.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, rule) in &self.areas {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                return Err(AppError::config_error(format!(
                    "Area name '{}' must be a single path segment",
                    name
                )));
            }
            for extension in &rule.extensions {
                validate_extension(extension, &format!("area '{}'", name))?;
            }
        }
        for (category, extensions) in &self.categories {
            for extension in extensions {
                validate_extension(extension, &format!("category '{}'", category))?;
            }
        }
        for file_name in self.root_files.iter().chain(self.anywhere_files.iter()) {
            if file_name.is_empty() || file_name.contains('/') || file_name.contains('\\') {
                return Err(AppError::config_error(format!(
                    "Allow-listed filename '{}' must be a bare filename",
                    file_name
                )));
            }
        }
        Ok(())
    }
}

fn validate_extension(extension: &str, context: &str) -> Result<(), AppError> {
    if !extension.starts_with('.') || extension.len() < 2 {
        return Err(AppError::config_error(format!(
            "Extension '{}' in {} must be dot-prefixed (e.g. \".py\")",
            extension, context
        )));
    }
    Ok(())
}

/// Parse and validate a rule table from TOML content.
pub fn parse_rules_content(content: &str) -> Result<LayoutRules, AppError> {
    let rules: LayoutRules = toml::from_str(content)?;
    rules.validate()?;
    Ok(rules)
}
