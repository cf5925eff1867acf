pub mod layout_catalog;
pub mod output_store;

pub use layout_catalog::LayoutCatalog;
pub use output_store::OutputStore;
