use std::fmt::Display;

use query_engine_execution::migrations::{IndexOutcome, MigrationOutcome, MigrationReport};

use super::rule;

pub fn render_header() -> String {
    [
        rule('='),
        "Schema Migration: Adding Category Column".to_string(),
        rule('='),
    ]
    .join("\n")
}

pub fn render(report: &MigrationReport) -> String {
    let table = &report.table;
    let mut lines = vec![];
    for result in &report.results {
        lines.push(String::new());
        match &result.outcome {
            MigrationOutcome::AlreadyApplied => {
                lines.push(format!(
                    "✓ Migration {} already applied",
                    result.migration.version
                ));
                lines.push("  No migration needed!".to_string());
            }
            MigrationOutcome::AlreadyPresent => {
                lines.push(format!("✓ Column 'Category' already exists in {table}"));
                lines.push("  No migration needed!".to_string());
            }
            MigrationOutcome::Applied { index } => {
                lines.push(format!("[1/2] Adding 'Category' column to {table}..."));
                lines.push("  ✓ Category column added successfully".to_string());
                lines.push(String::new());
                lines.push("[2/2] Adding index on (Subject, Category)...".to_string());
                lines.push(match index {
                    IndexOutcome::Added => "  ✓ Index added successfully".to_string(),
                    IndexOutcome::AlreadyExists => "  ✓ Index already exists".to_string(),
                    IndexOutcome::Failed(message) => {
                        format!("  ! Warning: Could not add index: {message}")
                    }
                });
            }
        }
    }

    if report.changed_schema() {
        lines.extend([
            String::new(),
            rule('='),
            "✓ Migration Complete!".to_string(),
            rule('='),
            String::new(),
            "Next steps:".to_string(),
            "  1. Run check-subjects and query-db to verify".to_string(),
            "  2. Manually set categories for existing data if needed".to_string(),
        ]);
    }
    lines.join("\n")
}

pub fn render_failure(error: impl Display) -> String {
    format!("\n✗ Migration failed: {error}")
}
