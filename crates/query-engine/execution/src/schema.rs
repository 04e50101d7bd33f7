//! Inspection of the live schema.

use sqlx::mysql::MySql;
use sqlx::Executor;

use gradebook_configuration::TableName;
use query_engine_translation::translation::migrations;

use crate::error::Error;
use crate::query;

/// The column names of `table` in the current database, in table order.
///
/// Empty when the table does not exist.
pub async fn table_columns<'c, E>(executor: E, table: &TableName) -> Result<Vec<String>, Error>
where
    E: Executor<'c, Database = MySql>,
{
    let rows: Vec<(String,)> =
        query::fetch_all(executor, &migrations::select_table_columns(table)).await?;
    Ok(rows.into_iter().map(|(name,)| name).collect())
}

/// MySQL column names are case-insensitive.
pub fn has_column(columns: &[String], column: &str) -> bool {
    columns.iter().any(|name| name.eq_ignore_ascii_case(column))
}
