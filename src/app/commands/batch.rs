//! Batch command - validate and write each spec independently.

use crate::app::AppContext;
use crate::domain::{AppError, BatchResult, FileSpec, WriteAction, check_path};
use crate::ports::{LayoutCatalog, OutputStore};

use super::create::write_with_policy;

/// Execute the batch command.
///
/// Specs are processed in order and independently: a rejected path or a
/// failed write becomes a `failed` entry and the batch moves on. The call
/// itself never fails; parse errors in the spec document are the caller's
/// to surface.
pub fn execute<S, C>(ctx: &AppContext<S, C>, specs: &[FileSpec]) -> BatchResult
where
    S: OutputStore,
    C: LayoutCatalog,
{
    let mut result = BatchResult::default();

    for spec in specs {
        let check = check_path(ctx.catalog().rules(), &spec.path, spec.expected);
        if !check.valid {
            result.record_failure(&spec.path, check.failure_reason().unwrap_or("InvalidPath"));
            continue;
        }
        for warning in &check.warnings {
            result.record_warning(&spec.path, warning);
        }

        match write_with_policy(ctx.store(), &spec.path, &spec.content, ctx.on_conflict()) {
            Ok(WriteAction::Skipped) => {
                result.record_skipped(&spec.path);
                result.record_warning(&spec.path, "existing file left in place (on_conflict = skip)");
            }
            Ok(action) => {
                result.record_created(&spec.path);
                if action == WriteAction::Overwritten {
                    result.record_warning(&spec.path, "overwrote existing file");
                }
            }
            Err(AppError::FileExists(_)) => {
                result.record_failure(
                    &spec.path,
                    "FileExists: target holds different content (on_conflict = fail)",
                );
            }
            Err(err) => {
                result.record_failure(&spec.path, format!("WriteFailure: {}", err));
            }
        }
    }

    result
}
