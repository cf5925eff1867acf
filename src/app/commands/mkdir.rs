//! Mkdir command - create a base directory and named subdirectories.

use crate::domain::{AppError, check_segments};
use crate::ports::OutputStore;

/// Execute the mkdir command.
///
/// Every input is checked before anything is created, so a bad name
/// fails the whole call instead of leaving a partial tree.
pub fn execute<S: OutputStore>(
    store: &S,
    base: &str,
    names: &[String],
) -> Result<Vec<String>, AppError> {
    let base_check = check_segments(base);
    if !base_check.valid {
        return Err(AppError::InvalidPath(base_check));
    }
    for name in names {
        let check = check_segments(name);
        if !check.valid {
            return Err(AppError::InvalidPath(check));
        }
    }

    store.create_dirs(base)?;
    let mut created = vec![base.to_string()];
    for name in names {
        let path = format!("{}/{}", base, name);
        store.create_dirs(&path)?;
        created.push(path);
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::temp_context;

    #[test]
    fn creates_base_and_subdirectories_in_order() {
        let (dir, ctx) = temp_context();
        let created = execute(
            ctx.store(),
            "services",
            &["auth".to_string(), "billing".to_string()],
        )
        .unwrap();

        assert_eq!(created, vec!["services", "services/auth", "services/billing"]);
        assert!(dir.path().join("services/auth").is_dir());
        assert!(dir.path().join("services/billing").is_dir());
    }

    #[test]
    fn base_alone_is_allowed() {
        let (dir, ctx) = temp_context();
        let created = execute(ctx.store(), "docs", &[]).unwrap();

        assert_eq!(created, vec!["docs"]);
        assert!(dir.path().join("docs").is_dir());
    }

    #[test]
    fn unsafe_name_fails_before_anything_is_created() {
        let (dir, ctx) = temp_context();
        let err = execute(
            ctx.store(),
            "services",
            &["auth".to_string(), "../escape".to_string()],
        )
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidPath(_)));
        assert!(!dir.path().join("services").exists());
    }
}
