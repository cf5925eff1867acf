//! Access to the layout rule table and structure plans.

use crate::domain::{AppError, LayoutRules, PlannedFile, StructureKind};

/// Port for the rule table and the structure plans derived from it.
pub trait LayoutCatalog {
    /// The active rule table.
    fn rules(&self) -> &LayoutRules;

    /// The planned files for a structure kind, in creation order.
    fn plan(&self, kind: StructureKind) -> Result<Vec<PlannedFile>, AppError>;

    /// Where the rule table came from, for display.
    fn rules_source(&self) -> &str;
}
