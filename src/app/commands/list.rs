//! List command - enumerate every file below the output root.

use crate::domain::AppError;
use crate::ports::OutputStore;

/// Execute the list command, returning sorted relative paths.
pub fn execute<S: OutputStore>(store: &S) -> Result<Vec<String>, AppError> {
    store.list_files()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::temp_context;

    #[test]
    fn lists_files_sorted_with_forward_slashes() {
        let (_dir, ctx) = temp_context();
        ctx.store().write("frontend/app.js", "x").unwrap();
        ctx.store().write("backend/main.py", "y").unwrap();
        ctx.store().write("README.md", "z").unwrap();

        let files = execute(ctx.store()).unwrap();
        assert_eq!(files, vec!["README.md", "backend/main.py", "frontend/app.js"]);
    }

    #[test]
    fn empty_root_lists_nothing() {
        let (_dir, ctx) = temp_context();
        assert!(execute(ctx.store()).unwrap().is_empty());
    }
}
