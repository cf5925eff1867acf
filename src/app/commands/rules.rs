//! Rules command - report the layout rules currently in effect.

use serde::Serialize;

use crate::domain::LayoutRules;
use crate::ports::LayoutCatalog;

/// The rule table together with where it was loaded from.
#[derive(Debug, Clone, Serialize)]
pub struct RulesReport {
    pub source: String,
    pub rules: LayoutRules,
}

/// Execute the rules command.
pub fn execute<C: LayoutCatalog>(catalog: &C) -> RulesReport {
    RulesReport {
        source: catalog.rules_source().to_string(),
        rules: catalog.rules().clone(),
    }
}
