//! Rows as they are read back from the database.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::database::grades;

/// A row of the subjects table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::FromRow)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

/// A weighted grading bucket within a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Category {
    pub subject: String,
    pub category_name: String,
    /// Percentage of the subject's grade carried by this category.
    pub total_weight: f64,
    /// Naming pattern for new assignments in this category.
    pub default_name: String,
}

/// An assignment and its grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Assignment {
    #[serde(rename = "id")]
    #[sqlx(rename = "id")]
    pub id: i64,
    pub subject: String,
    pub category: String,
    pub assignment_name: String,
    /// Hours spent.
    pub study_time: f64,
    /// Percentage; `None` until graded.
    pub grade: Option<f64>,
    pub weight: f64,
}

impl Assignment {
    /// The keys of an assignment row, in table order.
    pub fn column_names() -> &'static [&'static str] {
        &grades::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_serializes_with_database_column_names() {
        let assignment = Assignment {
            id: 7,
            subject: "History".to_string(),
            category: "Essays".to_string(),
            assignment_name: "Essay 1".to_string(),
            study_time: 2.5,
            grade: None,
            weight: 10.0,
        };

        let value = serde_json::to_value(&assignment).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();

        let mut expected = Assignment::column_names().to_vec();
        expected.sort_unstable();
        similar_asserts::assert_eq!(keys, expected);
    }

    #[test]
    fn category_round_trips_through_json() {
        let value = serde_json::json!({
            "Subject": "Science",
            "CategoryName": "Labs",
            "TotalWeight": 25.0,
            "DefaultName": "Lab {n}"
        });

        let category: Category = serde_json::from_value(value).unwrap();

        assert_eq!(category.category_name, "Labs");
        assert!((category.total_weight - 25.0).abs() < f64::EPSILON);
    }
}
