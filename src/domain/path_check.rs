//! Rule-driven classification of proposed output file paths.
//!
//! `check_path` is pure: it reports problems and fixes, it never touches
//! the filesystem and never corrects a path silently.

use std::fmt;

use serde::Serialize;

use super::{ExpectedType, LayoutRules};

/// Kind of validation finding. Serialized as the bare variant name, which
/// is also the failure reason recorded for batch entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    MissingExtension,
    RootLevelDisallowed,
    AreaExtensionMismatch,
    ExpectedTypeMismatch,
    UnsafeSegment,
}

impl IssueKind {
    /// Stable CamelCase name of the kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            IssueKind::MissingExtension => "MissingExtension",
            IssueKind::RootLevelDisallowed => "RootLevelDisallowed",
            IssueKind::AreaExtensionMismatch => "AreaExtensionMismatch",
            IssueKind::ExpectedTypeMismatch => "ExpectedTypeMismatch",
            IssueKind::UnsafeSegment => "UnsafeSegment",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

/// One validation problem with its specific message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
}

/// Outcome of classifying one path.
///
/// `valid` holds exactly when `issues` is empty. `warnings` are advisory
/// findings (naming conventions, unregistered extension categories) that
/// never affect validity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathCheckResult {
    pub valid: bool,
    pub path: String,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
    pub warnings: Vec<String>,
}

impl PathCheckResult {
    /// Comma-joined issue kind names, for error display.
    pub fn issue_summary(&self) -> String {
        self.issues.iter().map(|issue| issue.kind.kind_name()).collect::<Vec<_>>().join(", ")
    }

    /// Kind name of the first issue; batch failure reasons use this.
    pub fn failure_reason(&self) -> Option<&'static str> {
        self.issues.first().map(|issue| issue.kind.kind_name())
    }

    /// Whether the given issue kind was reported.
    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|issue| issue.kind == kind)
    }
}

/// Classify a proposed output path against the rule table.
///
/// Checks run in a fixed order so the first issue is the primary reason:
/// segment safety, root allow-list, extension presence, area extension
/// rule, test-naming convention (advisory), expected type.
pub fn check_path(rules: &LayoutRules, path: &str, expected: ExpectedType) -> PathCheckResult {
    let mut check = Check::default();

    let segments: Vec<&str> = path.split('/').collect();
    scan_segments(path, &segments, &mut check);

    let file_name = *segments.last().unwrap_or(&"");

    // Allow-listed root filenames are pre-blessed; nothing else to check.
    if segments.len() == 1 && rules.is_root_file(file_name) && check.issues.is_empty() {
        return check.finish(path);
    }

    if segments.len() == 1 {
        check.push_issue(
            IssueKind::RootLevelDisallowed,
            format!("'{}' is at the root level and not in the root allow-list", file_name),
            "place the file under an area subdirectory such as backend/ or frontend/",
        );
    }

    let anywhere = rules.is_anywhere_file(file_name);
    let extension = extension_of(file_name);

    if !anywhere && extension.is_none() {
        check.push_issue(
            IssueKind::MissingExtension,
            format!("'{}' has no file extension", file_name),
            "add an extension such as .py, .js, or .json; directories go through the mkdir operation",
        );
    }

    let area_name = segments[0];
    if segments.len() > 1
        && !anywhere
        && let Some(area) = rules.area(area_name)
        && let Some(ext) = extension.as_deref()
        && !area.allows(ext)
    {
        let message = format!(
            "extension '{}' is not allowed under {}/ (allowed: {})",
            ext,
            area_name,
            area.extension_list()
        );
        let suggestion = match rules.area_allowing(ext, area_name) {
            Some(other) => format!("move this file to {}/", other),
            None => format!("use one of {} under {}/", area.extension_list(), area_name),
        };
        check.push_issue(IssueKind::AreaExtensionMismatch, message, suggestion);
    }

    check_test_convention(rules, &segments, file_name, &mut check);
    check_expected_type(rules, expected, extension.as_deref(), anywhere, &mut check);

    check.finish(path)
}

/// Classify only the segment-safety rules.
///
/// Operations that take paths without applying layout rules (read, mkdir)
/// still refuse to step outside the output root.
pub fn check_segments(path: &str) -> PathCheckResult {
    let mut check = Check::default();
    let segments: Vec<&str> = path.split('/').collect();
    scan_segments(path, &segments, &mut check);
    check.finish(path)
}

/// Dot-prefixed lowercase extension of a filename; `None` when the name
/// has no extension. A leading dot alone (".gitignore") does not count.
fn extension_of(file_name: &str) -> Option<String> {
    let index = file_name.rfind('.')?;
    if index == 0 || index + 1 == file_name.len() {
        return None;
    }
    Some(file_name[index..].to_ascii_lowercase())
}

fn scan_segments(path: &str, segments: &[&str], check: &mut Check) {
    if path.is_empty() {
        check.push_issue(
            IssueKind::UnsafeSegment,
            "path is empty",
            "provide a relative file path such as backend/main.py",
        );
        return;
    }

    for (index, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            if index == 0 {
                check.push_issue(
                    IssueKind::UnsafeSegment,
                    "absolute paths are not allowed",
                    "use a path relative to the output root",
                );
            } else if index == segments.len() - 1 {
                check.push_issue(
                    IssueKind::UnsafeSegment,
                    "path ends with a separator",
                    "name a file; directories go through the mkdir operation",
                );
            } else {
                check.push_issue(
                    IssueKind::UnsafeSegment,
                    "path contains an empty segment",
                    "collapse duplicate separators",
                );
            }
            continue;
        }
        if *segment == "." || *segment == ".." {
            check.push_issue(
                IssueKind::UnsafeSegment,
                format!("path traversal segment '{}'", segment),
                "stay within the output root; remove '.' and '..' segments",
            );
            continue;
        }
        if segment.contains('\\') {
            check.push_issue(
                IssueKind::UnsafeSegment,
                format!("backslash in segment '{}'", segment),
                "use forward slashes as path separators",
            );
        }
        if segment.contains('\0') {
            check.push_issue(
                IssueKind::UnsafeSegment,
                "path contains a NUL byte",
                "remove control characters from the path",
            );
        }
    }
}

fn check_test_convention(
    rules: &LayoutRules,
    segments: &[&str],
    file_name: &str,
    check: &mut Check,
) {
    let Some(tests) = rules.tests.as_ref() else {
        return;
    };
    // Convention applies to area/tests/... paths only.
    if segments.len() < 3 || rules.area(segments[0]).is_none() {
        return;
    }
    let interior = &segments[1..segments.len() - 1];
    if !interior.iter().any(|segment| *segment == tests.dir_name) {
        return;
    }
    if tests.is_conventional(file_name) {
        return;
    }
    let sample_suffix =
        tests.javascript_suffixes.first().map(String::as_str).unwrap_or(".test.js");
    check.push_warning(format!(
        "'{}' inside {}/ does not follow the test naming convention; use {}*.py or *{}",
        file_name, tests.dir_name, tests.python_prefix, sample_suffix
    ));
}

fn check_expected_type(
    rules: &LayoutRules,
    expected: ExpectedType,
    extension: Option<&str>,
    anywhere: bool,
    check: &mut Check,
) {
    if anywhere {
        return;
    }
    let Some(ext) = extension else {
        return;
    };
    match rules.category_of(ext) {
        Some(category) => {
            if !expected.matches(category) {
                let message =
                    format!("expected a {} file but '{}' is {}", expected, ext, category);
                let suggestion = match expected.sample_extension() {
                    Some(sample) => format!(
                        "rename the file to use a {} extension such as {}",
                        expected, sample
                    ),
                    None => String::from("rename the file to match the expected type"),
                };
                check.push_issue(IssueKind::ExpectedTypeMismatch, message, suggestion);
            }
        }
        None => {
            if expected == ExpectedType::Any {
                check.push_warning(format!(
                    "extension '{}' has no registered category; pass an expected type to declare intent",
                    ext
                ));
            } else {
                check.push_warning(format!(
                    "extension '{}' has no registered category; accepting the declared {} type",
                    ext, expected
                ));
            }
        }
    }
}

/// Accumulator for findings; suggestions are deduplicated in order.
#[derive(Default)]
struct Check {
    issues: Vec<Issue>,
    suggestions: Vec<String>,
    warnings: Vec<String>,
}

impl Check {
    fn push_issue(
        &mut self,
        kind: IssueKind,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.issues.push(Issue { kind, message: message.into() });
        let suggestion = suggestion.into();
        if !self.suggestions.contains(&suggestion) {
            self.suggestions.push(suggestion);
        }
    }

    fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    fn finish(self, path: &str) -> PathCheckResult {
        PathCheckResult {
            valid: self.issues.is_empty(),
            path: path.to_string(),
            issues: self.issues,
            suggestions: self.suggestions,
            warnings: self.warnings,
        }
    }
}
