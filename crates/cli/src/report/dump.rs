use query_engine_execution::dump::DumpReport;
use query_engine_metadata::metadata::{Assignment, Category};

use super::rule;

pub fn render(report: &DumpReport) -> String {
    let mut lines = vec![rule('='), "DATABASE CONTENTS".to_string(), rule('=')];

    lines.extend([String::new(), "📁 CATEGORIES:".to_string(), rule('-')]);
    lines.extend(report.categories.iter().map(category_row));
    lines.push(String::new());
    lines.push(format!("Total: {} categories", report.categories.len()));

    lines.extend([
        String::new(),
        String::new(),
        "📝 ASSIGNMENTS:".to_string(),
        rule('-'),
    ]);
    lines.extend(report.assignments.iter().map(assignment_row));
    lines.push(String::new());
    lines.push(format!("Total: {} assignments", report.assignments.len()));

    lines.extend([
        String::new(),
        String::new(),
        "🔧 TESTING CRUD FUNCTION:".to_string(),
        rule('-'),
    ]);
    lines.push(format!(
        "  get_all_grades() returned {} rows",
        report.grades.len()
    ));
    if !report.grades.is_empty() {
        lines.push(format!(
            "  Sample row keys: {}",
            key_list(Assignment::column_names())
        ));
    }

    lines.push(String::new());
    lines.push(rule('='));
    lines.join("\n")
}

pub fn category_row(category: &Category) -> String {
    format!(
        "  {:<15} | {:<15} | {:>5.1}% | '{}'",
        category.subject, category.category_name, category.total_weight, category.default_name
    )
}

pub fn assignment_row(assignment: &Assignment) -> String {
    format!(
        "  [{}] {:<12} / {:<12} | {:<20} | {:>4.1}h | {:<6} | {:>5.1}%",
        assignment.id,
        assignment.subject,
        assignment.category,
        assignment.assignment_name,
        assignment.study_time,
        format_grade(assignment.grade),
        assignment.weight
    )
}

/// `['id', 'Subject', ...]`
pub fn key_list(keys: &[&str]) -> String {
    let quoted: Vec<String> = keys.iter().map(|key| format!("'{key}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// The grade with its decimal point kept, or `N/A` while ungraded.
pub fn format_grade(grade: Option<f64>) -> String {
    match grade {
        Some(grade) => format!("{grade:?}%"),
        None => "N/A".to_string(),
    }
}
