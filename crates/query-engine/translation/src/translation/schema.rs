//! The base schema, created when the tables do not exist yet.

use gradebook_configuration::{TableName, TableNames};
use query_engine_metadata::metadata::{
    categories, grades, migrations, subjects, DEFAULT_CATEGORY, NAME_LENGTH,
    SUBJECT_CATEGORY_INDEX,
};
use query_engine_sql::sql::ast::*;
use query_engine_sql::sql::helpers;

/// Every `CREATE TABLE IF NOT EXISTS` needed for a working gradebook, in dependency order.
pub fn base_schema(tables: &TableNames) -> Vec<Statement> {
    vec![
        create_subjects_table(&tables.subjects),
        create_grades_table(&tables.grades),
        create_categories_table(&tables.categories),
    ]
}

pub fn create_subjects_table(table: &TableName) -> Statement {
    Statement::CreateTable(CreateTable {
        if_not_exists: true,
        table: helpers::table(table.as_str()),
        columns: vec![
            helpers::id_column(subjects::ID),
            name_column(subjects::NAME),
        ],
        constraints: vec![TableConstraint::Unique {
            name: IndexName(format!("uq_{table}_{}", subjects::NAME)),
            columns: helpers::columns(&[subjects::NAME]),
        }],
    })
}

pub fn create_grades_table(table: &TableName) -> Statement {
    Statement::CreateTable(CreateTable {
        if_not_exists: true,
        table: helpers::table(table.as_str()),
        columns: vec![
            helpers::id_column(grades::ID),
            name_column(grades::SUBJECT),
            category_column(),
            name_column(grades::ASSIGNMENT_NAME),
            helpers::with_default(
                helpers::not_null_column(grades::STUDY_TIME, DataType::Double),
                Literal::Int(0),
            ),
            helpers::nullable_column(grades::GRADE, DataType::Double),
            helpers::with_default(
                helpers::not_null_column(grades::WEIGHT, DataType::Double),
                Literal::Int(0),
            ),
        ],
        constraints: vec![TableConstraint::Index {
            name: IndexName(SUBJECT_CATEGORY_INDEX.to_string()),
            columns: helpers::columns(&[grades::SUBJECT, grades::CATEGORY]),
        }],
    })
}

pub fn create_categories_table(table: &TableName) -> Statement {
    Statement::CreateTable(CreateTable {
        if_not_exists: true,
        table: helpers::table(table.as_str()),
        columns: vec![
            helpers::id_column(categories::ID),
            name_column(categories::SUBJECT),
            name_column(categories::CATEGORY_NAME),
            helpers::not_null_column(categories::TOTAL_WEIGHT, DataType::Double),
            name_column(categories::DEFAULT_NAME),
        ],
        constraints: vec![TableConstraint::Unique {
            name: IndexName(format!("uq_{table}_subject_category")),
            columns: helpers::columns(&[categories::SUBJECT, categories::CATEGORY_NAME]),
        }],
    })
}

/// The ledger of applied migrations, keyed by version and the grades table they ran on.
pub fn create_migrations_table(table: &TableName) -> Statement {
    Statement::CreateTable(CreateTable {
        if_not_exists: true,
        table: helpers::table(table.as_str()),
        columns: vec![
            helpers::not_null_column(
                migrations::VERSION,
                DataType::VarChar(migrations::VERSION_LENGTH),
            ),
            helpers::not_null_column(
                migrations::TABLE_NAME,
                DataType::VarChar(migrations::TABLE_NAME_LENGTH),
            ),
            name_column(migrations::DESCRIPTION),
            helpers::with_default(
                helpers::not_null_column(migrations::APPLIED_AT, DataType::Timestamp),
                Literal::CurrentTimestamp,
            ),
        ],
        constraints: vec![TableConstraint::PrimaryKey {
            columns: helpers::columns(&[migrations::VERSION, migrations::TABLE_NAME]),
        }],
    })
}

/// `Category VARCHAR(255) NOT NULL DEFAULT 'Uncategorized'`
pub fn category_column() -> ColumnDefinition {
    helpers::with_default(
        name_column(grades::CATEGORY),
        Literal::String(DEFAULT_CATEGORY.to_string()),
    )
}

fn name_column(name: &str) -> ColumnDefinition {
    helpers::not_null_column(name, DataType::VarChar(NAME_LENGTH))
}
