use std::fs;
use std::path::Path;

use include_dir::{Dir, include_dir};

use crate::domain::{
    AppError, LayoutRules, PlannedFile, StructureKind, parse_plan_content, parse_rules_content,
};
use crate::ports::LayoutCatalog;

static LAYOUT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/layout");

/// Display name for the compiled-in rule table.
pub const BUILTIN_RULES_SOURCE: &str = "built-in";

/// Layout catalog backed by the assets compiled into the binary.
///
/// Structure plans always come from the embedded assets; the rule table
/// can be replaced by a table loaded from disk.
pub struct AssetLayoutCatalog {
    rules: LayoutRules,
    source: String,
}

impl AssetLayoutCatalog {
    /// Load the catalog with the built-in rule table.
    pub fn load() -> Result<Self, AppError> {
        let content = asset_content("rules.toml")?;
        let rules = parse_rules_content(&content)?;
        Ok(Self { rules, source: BUILTIN_RULES_SOURCE.to_string() })
    }

    /// Load the catalog with a replacement rule table from `path`.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| AppError::InvalidRules {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        let rules = parse_rules_content(&content).map_err(|err| AppError::InvalidRules {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self { rules, source: path.display().to_string() })
    }
}

impl LayoutCatalog for AssetLayoutCatalog {
    fn rules(&self) -> &LayoutRules {
        &self.rules
    }

    fn plan(&self, kind: StructureKind) -> Result<Vec<PlannedFile>, AppError> {
        let content = asset_content(&format!("plans/{}.toml", kind.kind_name()))?;
        parse_plan_content(kind, &content)
    }

    fn rules_source(&self) -> &str {
        &self.source
    }
}

fn asset_content(path: &str) -> Result<String, AppError> {
    LAYOUT_DIR
        .get_file(path)
        .and_then(|file| file.contents_utf8())
        .map(|content| content.to_string())
        .ok_or_else(|| AppError::config_error(format!("Missing layout asset: {}", path)))
}
