use query_engine_execution::seed::{SeedOutcome, SeedReport};

pub const INITIALIZING: &str = "Initializing database...";

pub fn render(report: &SeedReport) -> String {
    let mut lines = vec![String::new(), "Current subjects in database:".to_string()];
    lines.extend(
        report
            .existing
            .iter()
            .map(|subject| format!("  - {} (ID: {})", subject.name, subject.id)),
    );
    lines.push(String::new());
    lines.push(format!("Total: {} subjects", report.existing.len()));

    lines.push(String::new());
    lines.push("Ensuring original subjects exist...".to_string());
    for outcome in &report.outcomes {
        match outcome {
            SeedOutcome::Added { name, id } => {
                lines.push(format!("  Adding missing subject: {name}"));
                lines.push(format!("    ✓ Added {name} (ID: {id})"));
            }
            SeedOutcome::AlreadyExists(subject) => lines.push(format!(
                "  ✓ {} already exists (ID: {})",
                subject.name, subject.id
            )),
        }
    }

    lines.push(String::new());
    lines.push("✓ All original subjects are in database!".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use query_engine_metadata::metadata::Subject;

    use super::*;

    fn subject(id: i64, name: &str) -> Subject {
        Subject {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn lists_existing_subjects_and_what_was_added() {
        let report = SeedReport {
            existing: vec![subject(1, "History")],
            outcomes: vec![
                SeedOutcome::Added {
                    name: "Mathematics".to_string(),
                    id: 2,
                },
                SeedOutcome::AlreadyExists(subject(1, "History")),
                SeedOutcome::Added {
                    name: "Science".to_string(),
                    id: 3,
                },
            ],
        };

        similar_asserts::assert_eq!(
            render(&report),
            [
                "",
                "Current subjects in database:",
                "  - History (ID: 1)",
                "",
                "Total: 1 subjects",
                "",
                "Ensuring original subjects exist...",
                "  Adding missing subject: Mathematics",
                "    ✓ Added Mathematics (ID: 2)",
                "  ✓ History already exists (ID: 1)",
                "  Adding missing subject: Science",
                "    ✓ Added Science (ID: 3)",
                "",
                "✓ All original subjects are in database!",
            ]
            .join("\n")
        );
    }

    #[test]
    fn empty_database_reports_zero_subjects() {
        let report = SeedReport {
            existing: vec![],
            outcomes: vec![],
        };

        assert!(render(&report).contains("\nTotal: 0 subjects\n"));
    }
}
