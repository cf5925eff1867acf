pub mod category;
pub mod conflict;
pub mod error;
pub mod file_spec;
pub mod path_check;
pub mod rules;
pub mod settings;
pub mod structure;

pub use category::{Category, ExpectedType};
pub use conflict::{ConflictPolicy, WriteAction};
pub use error::AppError;
pub use file_spec::{BatchResult, FailedSpec, FileSpec, parse_file_specs};
pub use path_check::{Issue, IssueKind, PathCheckResult, check_path, check_segments};
pub use rules::{AreaRule, LayoutRules, TestConvention, parse_rules_content};
pub use settings::{DEFAULT_OUTPUT_ROOT, Settings, parse_settings_content};
pub use structure::{PlannedFile, StructureKind, parse_plan_content};
