//! Reads and inserts used by the seed and dump tools.

use gradebook_configuration::TableName;
use query_engine_metadata::metadata::{categories, grades, subjects};
use query_engine_sql::sql::ast::*;
use query_engine_sql::sql::helpers;

pub fn select_all_subjects(table: &TableName) -> Statement {
    Statement::Select(Select {
        order_by: OrderBy {
            elements: helpers::columns(&[subjects::NAME]),
        },
        ..helpers::simple_select(helpers::columns(&subjects::ALL), helpers::table(table.as_str()))
    })
}

pub fn select_subject_by_name(table: &TableName, name: &str) -> Statement {
    Statement::Select(Select {
        where_: Where(Some(helpers::column_equals(
            subjects::NAME,
            Value::String(name.to_string()),
        ))),
        ..helpers::simple_select(helpers::columns(&subjects::ALL), helpers::table(table.as_str()))
    })
}

pub fn insert_subject(table: &TableName, name: &str) -> Statement {
    Statement::Insert(Insert {
        table: helpers::table(table.as_str()),
        columns: helpers::columns(&[subjects::NAME]),
        values: vec![Expression::Value(Value::String(name.to_string()))],
    })
}

/// Categories ordered by subject, then category name.
pub fn select_all_categories(table: &TableName) -> Statement {
    Statement::Select(Select {
        order_by: OrderBy {
            elements: helpers::columns(&[categories::SUBJECT, categories::CATEGORY_NAME]),
        },
        ..helpers::star_select(helpers::table(table.as_str()))
    })
}

/// Assignments ordered by subject, category and id, as the dump prints them.
pub fn select_all_assignments(table: &TableName) -> Statement {
    Statement::Select(Select {
        order_by: OrderBy {
            elements: helpers::columns(&[grades::SUBJECT, grades::CATEGORY, grades::ID]),
        },
        ..helpers::star_select(helpers::table(table.as_str()))
    })
}

/// Every grade row with exactly the assignment columns, in id order.
pub fn select_all_grades(table: &TableName) -> Statement {
    Statement::Select(Select {
        order_by: OrderBy {
            elements: helpers::columns(&[grades::ID]),
        },
        ..helpers::simple_select(helpers::columns(&grades::ALL), helpers::table(table.as_str()))
    })
}
