use std::fmt;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Semantic grouping of a file extension.
///
/// Extensions not mapped to a category by the rule table are *unknown* and
/// are never guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Python,
    Javascript,
    Config,
    Markup,
}

impl Category {
    /// Lowercase name as used in the rule table.
    pub fn category_name(&self) -> &'static str {
        match self {
            Category::Python => "python",
            Category::Javascript => "javascript",
            Category::Config => "config",
            Category::Markup => "markup",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category_name())
    }
}

/// File type a caller declares when validating a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpectedType {
    Python,
    Javascript,
    Config,
    /// No expectation; category checks are skipped.
    #[default]
    Any,
}

impl ExpectedType {
    /// All accepted expected types.
    pub const ALL: [ExpectedType; 4] = [
        ExpectedType::Python,
        ExpectedType::Javascript,
        ExpectedType::Config,
        ExpectedType::Any,
    ];

    /// Lowercase name as accepted on the command line.
    pub fn type_name(&self) -> &'static str {
        match self {
            ExpectedType::Python => "python",
            ExpectedType::Javascript => "javascript",
            ExpectedType::Config => "config",
            ExpectedType::Any => "any",
        }
    }

    /// Parse an expected type from its name.
    pub fn from_name(name: &str) -> Result<ExpectedType, AppError> {
        match name.to_lowercase().as_str() {
            "python" => Ok(ExpectedType::Python),
            "javascript" => Ok(ExpectedType::Javascript),
            "config" => Ok(ExpectedType::Config),
            "any" => Ok(ExpectedType::Any),
            _ => Err(AppError::InvalidExpectedType(name.to_string())),
        }
    }

    /// Whether a known category satisfies this expectation.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            ExpectedType::Python => category == Category::Python,
            ExpectedType::Javascript => category == Category::Javascript,
            ExpectedType::Config => category == Category::Config,
            ExpectedType::Any => true,
        }
    }

    /// A representative extension for suggestion text. `None` for `Any`.
    pub fn sample_extension(&self) -> Option<&'static str> {
        match self {
            ExpectedType::Python => Some(".py"),
            ExpectedType::Javascript => Some(".js"),
            ExpectedType::Config => Some(".json"),
            ExpectedType::Any => None,
        }
    }
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
