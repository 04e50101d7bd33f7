//! Run rendered statements through sqlx.

use sqlx::mysql::{MySql, MySqlArguments, MySqlQueryResult, MySqlRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{Executor, FromRow};

use query_engine_sql::sql::ast::Statement;
use query_engine_sql::sql::string::Param;

use crate::error::Error;

/// Execute a statement that returns no rows.
pub async fn execute<'c, E>(executor: E, statement: &Statement) -> Result<MySqlQueryResult, Error>
where
    E: Executor<'c, Database = MySql>,
{
    let sql = statement.to_sql();
    tracing::debug!(generated_sql = %sql.sql, params = ?sql.params);

    let query = bind_query(sqlx::query(&sql.sql), &sql.params);
    Ok(query.execute(executor).await?)
}

/// Fetch every row a statement returns.
pub async fn fetch_all<'c, E, T>(executor: E, statement: &Statement) -> Result<Vec<T>, Error>
where
    E: Executor<'c, Database = MySql>,
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let sql = statement.to_sql();
    tracing::debug!(generated_sql = %sql.sql, params = ?sql.params);

    let query = bind_query_as(sqlx::query_as::<_, T>(&sql.sql), &sql.params);
    Ok(query.fetch_all(executor).await?)
}

/// Fetch the first row a statement returns, if any.
pub async fn fetch_optional<'c, E, T>(
    executor: E,
    statement: &Statement,
) -> Result<Option<T>, Error>
where
    E: Executor<'c, Database = MySql>,
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let sql = statement.to_sql();
    tracing::debug!(generated_sql = %sql.sql, params = ?sql.params);

    let query = bind_query_as(sqlx::query_as::<_, T>(&sql.sql), &sql.params);
    Ok(query.fetch_optional(executor).await?)
}

fn bind_query<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    params: &'q [Param],
) -> Query<'q, MySql, MySqlArguments> {
    params.iter().fold(query, |query, param| match param {
        Param::String(string) => query.bind(string.as_str()),
    })
}

fn bind_query_as<'q, T>(
    query: QueryAs<'q, MySql, T, MySqlArguments>,
    params: &'q [Param],
) -> QueryAs<'q, MySql, T, MySqlArguments> {
    params.iter().fold(query, |query, param| match param {
        Param::String(string) => query.bind(string.as_str()),
    })
}
