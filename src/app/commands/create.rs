//! Create command - validate, then perform one scoped write.

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, ConflictPolicy, ExpectedType, WriteAction, check_path};
use crate::ports::{LayoutCatalog, OutputStore};
use crate::services::hex_digest;

/// Inputs for a single file creation.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    pub path: String,
    pub content: String,
    /// Free-form note about what the file contains; echoed, never stored.
    pub description: String,
    pub expected: ExpectedType,
}

impl CreateOptions {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            description: String::new(),
            expected: ExpectedType::default(),
        }
    }
}

/// What one create call did.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOutcome {
    pub path: String,
    pub action: WriteAction,
    pub bytes: usize,
    /// Advisory findings from validation; never block the write.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Execute the create command.
///
/// Validation runs first; an invalid path returns the full check result in
/// the error and no write happens.
pub fn execute<S, C>(
    ctx: &AppContext<S, C>,
    options: &CreateOptions,
) -> Result<CreateOutcome, AppError>
where
    S: OutputStore,
    C: LayoutCatalog,
{
    let check = check_path(ctx.catalog().rules(), &options.path, options.expected);
    if !check.valid {
        return Err(AppError::InvalidPath(check));
    }

    let action = write_with_policy(ctx.store(), &options.path, &options.content, ctx.on_conflict())?;

    Ok(CreateOutcome {
        path: options.path.clone(),
        action,
        bytes: options.content.len(),
        warnings: check.warnings,
    })
}

/// Resolve one write against the conflict policy.
///
/// A target that already holds byte-identical content short-circuits to
/// `Unchanged` under every policy, which keeps reruns clean.
pub(crate) fn write_with_policy<S: OutputStore>(
    store: &S,
    path: &str,
    content: &str,
    policy: ConflictPolicy,
) -> Result<WriteAction, AppError> {
    if store.exists(path) {
        if store.content_digest(path)? == hex_digest(content.as_bytes()) {
            return Ok(WriteAction::Unchanged);
        }
        return match policy {
            ConflictPolicy::Overwrite => {
                store.write(path, content)?;
                Ok(WriteAction::Overwritten)
            }
            ConflictPolicy::Skip => Ok(WriteAction::Skipped),
            ConflictPolicy::Fail => Err(AppError::FileExists(path.to_string())),
        };
    }

    store.write(path, content)?;
    Ok(WriteAction::Created)
}
