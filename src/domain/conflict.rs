use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AppError;

/// What a write does when the target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Replace the existing content.
    #[default]
    Overwrite,
    /// Leave the existing content and report the write as skipped.
    Skip,
    /// Refuse the write with an error.
    Fail,
}

impl ConflictPolicy {
    /// All policies in order.
    pub const ALL: [ConflictPolicy; 3] =
        [ConflictPolicy::Overwrite, ConflictPolicy::Skip, ConflictPolicy::Fail];

    pub fn policy_name(&self) -> &'static str {
        match self {
            ConflictPolicy::Overwrite => "overwrite",
            ConflictPolicy::Skip => "skip",
            ConflictPolicy::Fail => "fail",
        }
    }

    /// Parse a policy from its name.
    pub fn from_name(name: &str) -> Result<ConflictPolicy, AppError> {
        match name.to_lowercase().as_str() {
            "overwrite" => Ok(ConflictPolicy::Overwrite),
            "skip" => Ok(ConflictPolicy::Skip),
            "fail" => Ok(ConflictPolicy::Fail),
            _ => Err(AppError::InvalidConflictPolicy(name.to_string())),
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.policy_name())
    }
}

/// What actually happened to the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteAction {
    /// The file did not exist and was written.
    Created,
    /// The file existed with different content and was replaced.
    Overwritten,
    /// The file already held exactly this content; nothing was written.
    Unchanged,
    /// The file existed and the skip policy left it alone.
    Skipped,
}

impl WriteAction {
    pub fn action_name(&self) -> &'static str {
        match self {
            WriteAction::Created => "created",
            WriteAction::Overwritten => "overwritten",
            WriteAction::Unchanged => "unchanged",
            WriteAction::Skipped => "skipped",
        }
    }

    /// Whether the run left the file holding the requested content.
    pub fn content_in_place(&self) -> bool {
        !matches!(self, WriteAction::Skipped)
    }
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_from_name_roundtrips() {
        for policy in ConflictPolicy::ALL {
            assert_eq!(
                ConflictPolicy::from_name(policy.policy_name()).ok(),
                Some(policy)
            );
        }
    }

    #[test]
    fn policy_from_name_is_case_insensitive() {
        assert_eq!(ConflictPolicy::from_name("SKIP").ok(), Some(ConflictPolicy::Skip));
        assert!(matches!(
            ConflictPolicy::from_name("append"),
            Err(AppError::InvalidConflictPolicy(_))
        ));
    }

    #[test]
    fn default_policy_overwrites() {
        assert_eq!(ConflictPolicy::default(), ConflictPolicy::Overwrite);
    }

    #[test]
    fn only_skip_leaves_foreign_content() {
        assert!(WriteAction::Created.content_in_place());
        assert!(WriteAction::Overwritten.content_in_place());
        assert!(WriteAction::Unchanged.content_in_place());
        assert!(!WriteAction::Skipped.content_in_place());
    }
}
