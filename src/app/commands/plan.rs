//! Plan command - canonical file listing for a project structure.

use serde::Serialize;

use crate::domain::{AppError, PlannedFile, StructureKind};
use crate::ports::LayoutCatalog;

/// The canonical layout for one structure kind. Guidance only; nothing is
/// created.
#[derive(Debug, Clone, Serialize)]
pub struct StructurePlan {
    pub kind: StructureKind,
    pub description: String,
    pub files: Vec<PlannedFile>,
}

/// Execute the plan command.
///
/// The only operation that fails outright on bad input: an unrecognized
/// kind cannot be recovered into a partial answer.
pub fn execute<C: LayoutCatalog>(catalog: &C, kind_name: &str) -> Result<StructurePlan, AppError> {
    let kind = StructureKind::from_kind_name(kind_name).ok_or_else(|| {
        AppError::UnknownStructureKind {
            kind: kind_name.to_string(),
            available: StructureKind::available_names(),
        }
    })?;

    let files = catalog.plan(kind)?;
    Ok(StructurePlan { kind, description: kind.description().to_string(), files })
}
