//! Read command - fetch one file from under the output root.

use crate::domain::{AppError, check_segments};
use crate::ports::OutputStore;

/// Execute the read command.
///
/// Layout rules do not apply to reads, but the segment-safety rules do:
/// a read must not reach outside the root either.
pub fn execute<S: OutputStore>(store: &S, path: &str) -> Result<String, AppError> {
    let check = check_segments(path);
    if !check.valid {
        return Err(AppError::InvalidPath(check));
    }
    store.read(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::temp_context;

    #[test]
    fn reads_existing_content() {
        let (_dir, ctx) = temp_context();
        ctx.store().write("backend/main.py", "app = 1\n").unwrap();

        assert_eq!(execute(ctx.store(), "backend/main.py").unwrap(), "app = 1\n");
    }

    #[test]
    fn missing_file_is_reported_by_relative_path() {
        let (_dir, ctx) = temp_context();
        let err = execute(ctx.store(), "backend/missing.py").unwrap_err();

        match err {
            AppError::FileNotFound(path) => assert_eq!(path, "backend/missing.py"),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn traversal_reads_are_refused() {
        let (_dir, ctx) = temp_context();
        let err = execute(ctx.store(), "../outside.py").unwrap_err();
        assert!(matches!(err, AppError::InvalidPath(_)));
    }
}
