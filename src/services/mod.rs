pub mod layout_assets;
pub mod output_filesystem;

pub use layout_assets::{AssetLayoutCatalog, BUILTIN_RULES_SOURCE};
pub use output_filesystem::{FilesystemOutputStore, hex_digest};
