//! filewright: validate, plan, and write project-layout files into a scoped output root.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::{
    AppContext,
    commands::{batch, create, list, mkdir, plan, read, rules, validate},
};
use services::{AssetLayoutCatalog, FilesystemOutputStore};

pub use app::commands::{CreateOptions, CreateOutcome, RulesReport, StructurePlan};
pub use app::config::{RunConfig, SETTINGS_FILE, load_settings, resolve_run_config};
pub use domain::{
    AppError, BatchResult, ConflictPolicy, ExpectedType, FailedSpec, FileSpec, Issue, IssueKind,
    LayoutRules, PathCheckResult, PlannedFile, Settings, StructureKind, WriteAction,
    parse_file_specs,
};

fn catalog_for(config: &RunConfig) -> Result<AssetLayoutCatalog, AppError> {
    match config.rules_path.as_deref() {
        Some(path) => AssetLayoutCatalog::load_from(path),
        None => AssetLayoutCatalog::load(),
    }
}

fn open_context(
    config: &RunConfig,
) -> Result<AppContext<FilesystemOutputStore, AssetLayoutCatalog>, AppError> {
    let store = FilesystemOutputStore::open(&config.root)?;
    let catalog = catalog_for(config)?;
    Ok(AppContext::new(store, catalog, config.on_conflict))
}

/// Classify a proposed output path. Pure; nothing is read or written.
///
/// The result reports every issue found along with actionable suggestions;
/// an invalid path is an answer here, not an error.
pub fn validate(
    config: &RunConfig,
    path: &str,
    expected: ExpectedType,
) -> Result<PathCheckResult, AppError> {
    let catalog = catalog_for(config)?;
    Ok(validate::execute(&catalog, path, expected))
}

/// Canonical file listing for a project structure kind. Creates nothing.
pub fn plan(config: &RunConfig, kind: &str) -> Result<StructurePlan, AppError> {
    let catalog = catalog_for(config)?;
    plan::execute(&catalog, kind)
}

/// Validate and write a single file under the output root.
pub fn create_file(config: &RunConfig, options: &CreateOptions) -> Result<CreateOutcome, AppError> {
    let ctx = open_context(config)?;
    create::execute(&ctx, options)
}

/// Validate and write a batch of file specs.
///
/// Entries are processed independently; a rejected path or failed write
/// lands in the result's `failed` list and never aborts the batch.
pub fn create_files_batch(config: &RunConfig, specs: &[FileSpec]) -> Result<BatchResult, AppError> {
    let ctx = open_context(config)?;
    Ok(batch::execute(&ctx, specs))
}

/// Read one file from under the output root.
pub fn read_file(config: &RunConfig, path: &str) -> Result<String, AppError> {
    let ctx = open_context(config)?;
    read::execute(ctx.store(), path)
}

/// List every file below the output root, sorted.
pub fn list_files(config: &RunConfig) -> Result<Vec<String>, AppError> {
    let ctx = open_context(config)?;
    list::execute(ctx.store())
}

/// Create a base directory and named subdirectories under the output root.
pub fn create_dirs(
    config: &RunConfig,
    base: &str,
    names: &[String],
) -> Result<Vec<String>, AppError> {
    let ctx = open_context(config)?;
    mkdir::execute(ctx.store(), base, names)
}

/// The layout rules currently in effect and where they were loaded from.
pub fn layout_rules(config: &RunConfig) -> Result<RulesReport, AppError> {
    let catalog = catalog_for(config)?;
    Ok(rules::execute(&catalog))
}
