//! One executor per named operation.
//!
//! Executors take the narrowest ports they need and return plain data;
//! presentation (text vs JSON, exit codes) stays in `main`.

pub mod batch;
pub mod create;
pub mod list;
pub mod mkdir;
pub mod plan;
pub mod read;
pub mod rules;
pub mod validate;

pub use create::{CreateOptions, CreateOutcome};
pub use plan::StructurePlan;
pub use rules::RulesReport;
