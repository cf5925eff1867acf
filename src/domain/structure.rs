use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AppError;

/// The project structures the planner knows how to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureKind {
    /// Python backend service with tests.
    BackendFastapi,
    /// React frontend application.
    FrontendReact,
    /// Pytest suite for an existing backend.
    TestsBackend,
    /// Jest suite for an existing frontend.
    TestsFrontend,
    /// Top-level Docker and repository support files.
    Docker,
}

impl StructureKind {
    /// All available structure kinds in order.
    pub const ALL: [StructureKind; 5] = [
        StructureKind::BackendFastapi,
        StructureKind::FrontendReact,
        StructureKind::TestsBackend,
        StructureKind::TestsFrontend,
        StructureKind::Docker,
    ];

    /// Stable name for this kind, used in plan documents and on the CLI.
    pub fn kind_name(&self) -> &'static str {
        match self {
            StructureKind::BackendFastapi => "backend-fastapi",
            StructureKind::FrontendReact => "frontend-react",
            StructureKind::TestsBackend => "tests-backend",
            StructureKind::TestsFrontend => "tests-frontend",
            StructureKind::Docker => "docker",
        }
    }

    /// Parse a kind from its name. Underscores and common shorthands are
    /// accepted.
    pub fn from_kind_name(name: &str) -> Option<StructureKind> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "backend-fastapi" | "backend" => Some(StructureKind::BackendFastapi),
            "frontend-react" | "frontend" => Some(StructureKind::FrontendReact),
            "tests-backend" => Some(StructureKind::TestsBackend),
            "tests-frontend" => Some(StructureKind::TestsFrontend),
            "docker" => Some(StructureKind::Docker),
            _ => None,
        }
    }

    /// Description of what this structure lays out.
    pub fn description(&self) -> &'static str {
        match self {
            StructureKind::BackendFastapi => {
                "FastAPI backend with entrypoint, models, database, and test scaffolding."
            }
            StructureKind::FrontendReact => {
                "React frontend with package manifest, public shell, and src components."
            }
            StructureKind::TestsBackend => "Pytest suite for the backend service.",
            StructureKind::TestsFrontend => "Jest suite for React components.",
            StructureKind::Docker => "Docker Compose and repository support files.",
        }
    }

    /// Comma-joined list of every kind name, for error messages.
    pub fn available_names() -> String {
        StructureKind::ALL
            .iter()
            .map(|kind| kind.kind_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

/// One file a structure plan intends to create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedFile {
    pub path: String,
    pub role: String,
}

#[derive(Deserialize)]
struct PlanDocument {
    kind: String,
    #[serde(default)]
    files: Vec<PlannedFile>,
}

/// Parse a plan document and validate it against the kind it was loaded
/// for.
pub fn parse_plan_content(
    kind: StructureKind,
    content: &str,
) -> Result<Vec<PlannedFile>, AppError> {
    let document: PlanDocument = toml::from_str(content)?;

    if document.kind != kind.kind_name() {
        return Err(AppError::Configuration(format!(
            "plan document declares kind '{}' but was loaded for '{}'",
            document.kind, kind
        )));
    }
    if document.files.is_empty() {
        return Err(AppError::Configuration(format!("plan for '{}' lists no files", kind)));
    }
    for file in &document.files {
        if file.path.is_empty() {
            return Err(AppError::Configuration(format!(
                "plan for '{}' contains a file entry with an empty path",
                kind
            )));
        }
        if file.role.is_empty() {
            return Err(AppError::Configuration(format!(
                "plan entry '{}' has no role description",
                file.path
            )));
        }
    }

    Ok(document.files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_lowercase() {
        for kind in StructureKind::ALL {
            assert_eq!(kind.kind_name(), kind.kind_name().to_lowercase());
        }
    }

    #[test]
    fn kind_from_name_roundtrips() {
        for kind in StructureKind::ALL {
            assert_eq!(StructureKind::from_kind_name(kind.kind_name()), Some(kind));
        }
    }

    #[test]
    fn kind_from_name_accepts_underscore_form() {
        assert_eq!(
            StructureKind::from_kind_name("backend_fastapi"),
            Some(StructureKind::BackendFastapi)
        );
        assert_eq!(StructureKind::from_kind_name("TESTS-BACKEND"), Some(StructureKind::TestsBackend));
        assert_eq!(StructureKind::from_kind_name("rails"), None);
    }

    #[test]
    fn all_kinds_have_descriptions() {
        for kind in StructureKind::ALL {
            assert!(!kind.description().is_empty());
        }
    }

    #[test]
    fn plan_content_parses_files_in_order() {
        let content = r#"
kind = "docker"

[[files]]
path = "docker-compose.yml"
role = "service composition"

[[files]]
path = "README.md"
role = "project overview"
"#;
        let files = parse_plan_content(StructureKind::Docker, content)
            .expect("plan should parse");
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "docker-compose.yml");
        assert_eq!(files[1].role, "project overview");
    }

    #[test]
    fn plan_content_rejects_kind_mismatch() {
        let content = r#"
kind = "docker"

[[files]]
path = "docker-compose.yml"
role = "service composition"
"#;
        let result = parse_plan_content(StructureKind::FrontendReact, content);
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn plan_content_rejects_empty_file_list() {
        let result = parse_plan_content(StructureKind::Docker, "kind = \"docker\"\n");
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
