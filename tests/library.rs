use assert_fs::prelude::*;
use filewright::{
    AppError, ConflictPolicy, CreateOptions, ExpectedType, FileSpec, RunConfig, StructureKind,
    WriteAction,
};

fn config_at(root: &assert_fs::TempDir) -> RunConfig {
    RunConfig {
        root: root.path().join("outputs").to_string_lossy().into_owned(),
        ..RunConfig::default()
    }
}

#[test]
fn library_lifecycle_coverage() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = config_at(&temp);

    // 1. Validate: pure classification, both answers.
    let ok = filewright::validate(&config, "backend/main.py", ExpectedType::Python).unwrap();
    assert!(ok.valid);
    let bad = filewright::validate(&config, "main.py", ExpectedType::Any).unwrap();
    assert!(!bad.valid);
    assert_eq!(bad.failure_reason(), Some("RootLevelDisallowed"));

    // 2. Plan: canonical listing, no writes.
    let plan = filewright::plan(&config, "backend-fastapi").unwrap();
    assert_eq!(plan.kind, StructureKind::BackendFastapi);
    assert_eq!(plan.files[0].path, "backend/main.py");
    temp.child("outputs").assert(predicates::path::missing());

    // 3. Create: validated write under the root.
    let outcome = filewright::create_file(
        &config,
        &CreateOptions::new("backend/main.py", "app = 1\n"),
    )
    .unwrap();
    assert_eq!(outcome.action, WriteAction::Created);
    temp.child("outputs/backend/main.py").assert("app = 1\n");

    // 4. Batch: independent entries, one failure recorded.
    let specs = vec![
        FileSpec {
            path: "frontend/src/App.js".to_string(),
            content: "export {};\n".to_string(),
            expected: ExpectedType::Javascript,
            description: None,
        },
        FileSpec {
            path: "nope".to_string(),
            content: "x\n".to_string(),
            expected: ExpectedType::Any,
            description: None,
        },
    ];
    let result = filewright::create_files_batch(&config, &specs).unwrap();
    assert_eq!(result.created, vec!["frontend/src/App.js"]);
    assert_eq!(result.failed[0].reason, "RootLevelDisallowed");
    temp.child("outputs/frontend/src/App.js").assert(predicates::path::exists());

    // 5. Read and list see exactly what was written.
    let content = filewright::read_file(&config, "backend/main.py").unwrap();
    assert_eq!(content, "app = 1\n");
    let files = filewright::list_files(&config).unwrap();
    assert_eq!(files, vec!["backend/main.py", "frontend/src/App.js"]);

    // 6. Mkdir: validated directory creation.
    let created =
        filewright::create_dirs(&config, "services", &["auth".to_string()]).unwrap();
    assert_eq!(created, vec!["services", "services/auth"]);
    temp.child("outputs/services/auth").assert(predicates::path::is_dir());

    // 7. Rules: observable rule table.
    let report = filewright::layout_rules(&config).unwrap();
    assert_eq!(report.source, "built-in");
    assert!(report.rules.is_root_file("README.md"));
}

#[test]
fn create_file_refuses_invalid_paths() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = config_at(&temp);

    let err = filewright::create_file(&config, &CreateOptions::new("no_extension", "x"))
        .unwrap_err();

    match err {
        AppError::InvalidPath(check) => {
            assert!(!check.valid);
            assert!(!check.suggestions.is_empty());
        }
        other => panic!("expected InvalidPath, got {:?}", other),
    }
    temp.child("outputs/no_extension").assert(predicates::path::missing());
}

#[test]
fn conflict_policy_flows_from_the_config() {
    let temp = assert_fs::TempDir::new().unwrap();
    let mut config = config_at(&temp);

    filewright::create_file(&config, &CreateOptions::new("backend/main.py", "old\n")).unwrap();

    config.on_conflict = ConflictPolicy::Fail;
    let err = filewright::create_file(&config, &CreateOptions::new("backend/main.py", "new\n"))
        .unwrap_err();
    assert!(matches!(err, AppError::FileExists(_)));

    config.on_conflict = ConflictPolicy::Skip;
    let outcome =
        filewright::create_file(&config, &CreateOptions::new("backend/main.py", "new\n"))
            .unwrap();
    assert_eq!(outcome.action, WriteAction::Skipped);
    temp.child("outputs/backend/main.py").assert("old\n");
}

#[test]
fn unknown_plan_kind_is_an_error_not_a_panic() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = config_at(&temp);

    let err = filewright::plan(&config, "rails").unwrap_err();
    match err {
        AppError::UnknownStructureKind { kind, available } => {
            assert_eq!(kind, "rails");
            assert!(available.contains("frontend-react"));
        }
        other => panic!("expected UnknownStructureKind, got {:?}", other),
    }
}
