use crate::domain::ConflictPolicy;
use crate::ports::{LayoutCatalog, OutputStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: OutputStore, C: LayoutCatalog> {
    store: S,
    catalog: C,
    on_conflict: ConflictPolicy,
}

impl<S: OutputStore, C: LayoutCatalog> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(store: S, catalog: C, on_conflict: ConflictPolicy) -> Self {
        Self { store, catalog, on_conflict }
    }

    /// Get a reference to the output store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the layout catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The conflict policy writes run under.
    pub fn on_conflict(&self) -> ConflictPolicy {
        self.on_conflict
    }
}
