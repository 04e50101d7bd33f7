use gradebook_configuration::TableNames;
use query_engine_sql::sql::ast::Statement;
use query_engine_sql::sql::string::Param;

/// The default table names, as the tools use them without any overrides.
pub fn default_tables() -> TableNames {
    TableNames::default()
}

/// Render a statement, returning the SQL text and its parameters.
pub fn render(statement: &Statement) -> (String, Vec<Param>) {
    let sql = statement.to_sql();
    (sql.sql, sql.params)
}
