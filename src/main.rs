use std::fs;
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::Select;
use filewright::{
    AppError, BatchResult, ConflictPolicy, CreateOptions, ExpectedType, PathCheckResult,
    RulesReport, StructureKind, StructurePlan,
};

#[derive(Parser)]
#[command(name = "filewright")]
#[command(version)]
#[command(
    about = "Validate, plan, and write files into a scoped project layout",
    long_about = None
)]
struct Cli {
    /// Output root directory (overrides filewright.toml)
    #[arg(long, global = true)]
    root: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a proposed file path against the layout rules
    #[clap(visible_alias = "v")]
    Validate {
        /// Relative path to classify
        path: String,
        /// Expected file type: python, javascript, config, or any
        #[arg(short, long, default_value = "any")]
        expect: String,
    },
    /// Show the canonical file plan for a project structure
    #[clap(visible_alias = "p")]
    Plan {
        /// Structure kind (prompted for when omitted)
        kind: Option<String>,
    },
    /// Validate and write one file under the output root
    #[clap(visible_alias = "c")]
    Create {
        /// Relative path to write
        path: String,
        /// Inline file content
        #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
        content: Option<String>,
        /// Read the content from this file instead
        #[arg(long, value_name = "FILE")]
        content_file: Option<PathBuf>,
        /// Note on what the file contains
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expected file type: python, javascript, config, or any
        #[arg(short, long, default_value = "any")]
        expect: String,
        /// Policy when the target exists: overwrite, skip, or fail
        #[arg(long)]
        on_conflict: Option<String>,
    },
    /// Write every file spec in a JSON document
    #[clap(visible_alias = "b")]
    Batch {
        /// JSON file holding [{"path", "content", "expected"?, "description"?}, ...]
        specs: PathBuf,
        /// Policy when a target exists: overwrite, skip, or fail
        #[arg(long)]
        on_conflict: Option<String>,
    },
    /// Print one file from under the output root
    #[clap(visible_alias = "r")]
    Read {
        /// Relative path to read
        path: String,
    },
    /// List every file below the output root
    #[clap(visible_alias = "ls")]
    List,
    /// Create a directory and named subdirectories
    #[clap(visible_alias = "mk")]
    Mkdir {
        /// Base directory, relative to the output root
        base: String,
        /// Subdirectories to create under the base
        names: Vec<String>,
    },
    /// Show the layout rules currently in effect
    Rules,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, AppError> {
    let settings = filewright::load_settings(&std::env::current_dir()?)?;
    let conflict_flag = conflict_flag(&cli.command)?;
    let config = filewright::resolve_run_config(&settings, cli.root.as_deref(), conflict_flag);
    let json = cli.json;

    match cli.command {
        Commands::Validate { path, expect } => {
            let expected = ExpectedType::from_name(&expect)?;
            let result = filewright::validate(&config, &path, expected)?;
            if json {
                print_json(&result)?;
            } else {
                print_check(&result);
            }
            Ok(if result.valid { 0 } else { 1 })
        }
        Commands::Plan { kind } => {
            let kind = match kind {
                Some(value) => value,
                None => select_kind()?,
            };
            let plan = filewright::plan(&config, &kind)?;
            if json {
                print_json(&plan)?;
            } else {
                print_plan(&plan);
            }
            Ok(0)
        }
        Commands::Create { path, content, content_file, description, expect, on_conflict: _ } => {
            let content = match (content, content_file) {
                (Some(text), _) => text,
                (None, Some(file)) => fs::read_to_string(&file)?,
                (None, None) => unreachable!("clap requires one content source"),
            };
            let options = CreateOptions {
                path,
                content,
                description,
                expected: ExpectedType::from_name(&expect)?,
            };
            let outcome = match filewright::create_file(&config, &options) {
                Ok(outcome) => outcome,
                // Findings are an answer, not an error.
                Err(AppError::InvalidPath(check)) => {
                    if json {
                        print_json(&check)?;
                    } else {
                        print_check(&check);
                    }
                    return Ok(1);
                }
                Err(err) => return Err(err),
            };
            if json {
                print_json(&outcome)?;
            } else {
                println!("✅ {} {} ({} bytes)", outcome.action, outcome.path, outcome.bytes);
                for warning in &outcome.warnings {
                    println!("⚠️  {}", warning);
                }
            }
            Ok(0)
        }
        Commands::Batch { specs, on_conflict: _ } => {
            let document = fs::read_to_string(&specs)?;
            let specs = filewright::parse_file_specs(&document)?;
            let result = filewright::create_files_batch(&config, &specs)?;
            if json {
                print_json(&result)?;
            } else {
                print_batch(&result);
            }
            Ok(if result.has_failures() { 1 } else { 0 })
        }
        Commands::Read { path } => {
            let content = filewright::read_file(&config, &path)?;
            if json {
                print_json(&content)?;
            } else {
                print!("{}", content);
            }
            Ok(0)
        }
        Commands::List => {
            let files = filewright::list_files(&config)?;
            if json {
                print_json(&files)?;
            } else if files.is_empty() {
                println!("(no files under {})", config.root);
            } else {
                for file in &files {
                    println!("{}", file);
                }
            }
            Ok(0)
        }
        Commands::Mkdir { base, names } => {
            let created = filewright::create_dirs(&config, &base, &names)?;
            if json {
                print_json(&created)?;
            } else {
                for path in &created {
                    println!("✅ {}/", path);
                }
            }
            Ok(0)
        }
        Commands::Rules => {
            let report = filewright::layout_rules(&config)?;
            if json {
                print_json(&report)?;
            } else {
                print_rules(&report);
            }
            Ok(0)
        }
    }
}

/// Per-command conflict flag, parsed before the command is consumed.
fn conflict_flag(command: &Commands) -> Result<Option<ConflictPolicy>, AppError> {
    let name = match command {
        Commands::Create { on_conflict, .. } | Commands::Batch { on_conflict, .. } => {
            on_conflict.as_deref()
        }
        _ => None,
    };
    name.map(ConflictPolicy::from_name).transpose()
}

/// Interactive structure selection with a stdin fallback.
fn select_kind() -> Result<String, AppError> {
    let items: Vec<String> = StructureKind::ALL
        .iter()
        .map(|kind| format!("{} - {}", kind.kind_name(), kind.description()))
        .collect();

    if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        let selection = Select::new()
            .with_prompt("Select a structure")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| AppError::config_error(format!("Structure selection failed: {}", e)))?;

        Ok(StructureKind::ALL[selection].kind_name().to_string())
    } else {
        // Non-interactive: read a 1-based index or a kind name from stdin.
        let mut input = String::new();
        let mut stdin = std::io::stdin().lock();
        stdin
            .read_line(&mut input)
            .map_err(|e| AppError::config_error(format!("Failed to read structure kind: {}", e)))?;

        let trimmed = input.trim();
        if let Ok(index) = trimmed.parse::<usize>()
            && index >= 1
            && index <= StructureKind::ALL.len()
        {
            return Ok(StructureKind::ALL[index - 1].kind_name().to_string());
        }

        Ok(trimmed.to_string())
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_check(result: &PathCheckResult) {
    if result.valid {
        println!("✅ {} is valid", result.path);
    } else {
        println!("❌ {} is invalid", result.path);
        for issue in &result.issues {
            println!("  • [{}] {}", issue.kind, issue.message);
        }
        if !result.suggestions.is_empty() {
            println!("Suggestions:");
            for suggestion in &result.suggestions {
                println!("  • {}", suggestion);
            }
        }
    }
    if !result.warnings.is_empty() {
        println!("⚠️  Warnings:");
        for warning in &result.warnings {
            println!("  • {}", warning);
        }
    }
}

fn print_plan(plan: &StructurePlan) {
    println!("Plan for {} ({} files)", plan.kind, plan.files.len());
    println!("{}", plan.description);
    for file in &plan.files {
        println!("  • {} ({})", file.path, file.role);
    }
}

fn print_batch(result: &BatchResult) {
    for path in &result.created {
        println!("✅ {}", path);
    }
    for failure in &result.failed {
        println!("❌ {}: {}", failure.path, failure.reason);
    }
    if !result.warnings.is_empty() {
        println!("⚠️  Warnings:");
        for warning in &result.warnings {
            println!("  • {}", warning);
        }
    }
    println!("{}", result.summary());
}

fn print_rules(report: &RulesReport) {
    println!("Rules source: {}", report.source);
    println!("Root files: {}", report.rules.root_files.join(", "));
    println!("Anywhere files: {}", report.rules.anywhere_files.join(", "));
    println!("Areas:");
    for (name, area) in &report.rules.areas {
        println!("  • {}/ ({}): {}", name, area.label, area.extension_list());
    }
    println!("Categories:");
    for (category, extensions) in &report.rules.categories {
        println!("  • {}: {}", category, extensions.join(", "));
    }
    if let Some(tests) = &report.rules.tests {
        println!(
            "Tests: {}/ directories expect {}*.py or *{} names",
            tests.dir_name,
            tests.python_prefix,
            tests.javascript_suffixes.first().map(String::as_str).unwrap_or(".test.js")
        );
    }
}
