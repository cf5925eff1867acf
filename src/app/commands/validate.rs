//! Validate command - classifies a path without touching the filesystem.

use crate::domain::{ExpectedType, PathCheckResult, check_path};
use crate::ports::LayoutCatalog;

/// Execute the validate command.
///
/// Pure: returns the classification result, valid or not. Callers decide
/// how to surface findings (the CLI maps an invalid result to exit 1).
pub fn execute<C: LayoutCatalog>(
    catalog: &C,
    path: &str,
    expected: ExpectedType,
) -> PathCheckResult {
    check_path(catalog.rules(), path, expected)
}
