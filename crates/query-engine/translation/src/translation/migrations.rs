//! Statements used by schema migrations and their ledger.

use gradebook_configuration::TableName;
use query_engine_metadata::metadata::{grades, migrations, SUBJECT_CATEGORY_INDEX};
use query_engine_sql::sql::ast::*;
use query_engine_sql::sql::helpers;

use super::schema::category_column;

/// The columns of `table` in the current database, in table order.
pub fn select_table_columns(table: &TableName) -> Statement {
    Statement::Select(Select {
        where_: Where(Some(helpers::and(
            helpers::column_equals_function("TABLE_SCHEMA", Function::Database),
            helpers::column_equals("TABLE_NAME", Value::String(table.to_string())),
        ))),
        order_by: OrderBy {
            elements: helpers::columns(&["ORDINAL_POSITION"]),
        },
        ..helpers::simple_select(
            helpers::columns(&["COLUMN_NAME"]),
            helpers::qualified_table("information_schema", "COLUMNS"),
        )
    })
}

/// Add `Category` right after `Subject`.
pub fn add_category_column(table: &TableName) -> Statement {
    Statement::AlterTable(AlterTable {
        table: helpers::table(table.as_str()),
        action: AlterTableAction::AddColumn {
            column: category_column(),
            after: helpers::column(grades::SUBJECT),
        },
    })
}

pub fn add_subject_category_index(table: &TableName) -> Statement {
    Statement::AlterTable(AlterTable {
        table: helpers::table(table.as_str()),
        action: AlterTableAction::AddIndex {
            name: IndexName(SUBJECT_CATEGORY_INDEX.to_string()),
            columns: helpers::columns(&[grades::SUBJECT, grades::CATEGORY]),
        },
    })
}

/// The versions `ledger` records as applied to `target`.
pub fn select_applied_migrations(ledger: &TableName, target: &TableName) -> Statement {
    Statement::Select(Select {
        where_: Where(Some(helpers::column_equals(
            migrations::TABLE_NAME,
            Value::String(target.to_string()),
        ))),
        order_by: OrderBy {
            elements: helpers::columns(&[migrations::VERSION]),
        },
        ..helpers::simple_select(
            helpers::columns(&[migrations::VERSION]),
            helpers::table(ledger.as_str()),
        )
    })
}

pub fn insert_applied_migration(
    ledger: &TableName,
    target: &TableName,
    version: &str,
    description: &str,
) -> Statement {
    Statement::Insert(Insert {
        table: helpers::table(ledger.as_str()),
        columns: helpers::columns(&[
            migrations::VERSION,
            migrations::TABLE_NAME,
            migrations::DESCRIPTION,
        ]),
        values: vec![
            Expression::Value(Value::String(version.to_string())),
            Expression::Value(Value::String(target.to_string())),
            Expression::Value(Value::String(description.to_string())),
        ],
    })
}
