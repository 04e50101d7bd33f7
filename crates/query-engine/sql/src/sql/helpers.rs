//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(None)
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

// Names //

/// An unqualified table in the current database.
pub fn table(name: &str) -> TableReference {
    TableReference {
        schema: None,
        table: TableName(name.to_string()),
    }
}

/// A table qualified by its schema.
pub fn qualified_table(schema: &str, name: &str) -> TableReference {
    TableReference {
        schema: Some(SchemaName(schema.to_string())),
        table: TableName(name.to_string()),
    }
}

pub fn column(name: &str) -> ColumnName {
    ColumnName(name.to_string())
}

pub fn columns(names: &[&str]) -> Vec<ColumnName> {
    names.iter().map(|name| column(name)).collect()
}

// Column definitions //

/// A `NOT NULL` column with no default.
pub fn not_null_column(name: &str, data_type: DataType) -> ColumnDefinition {
    ColumnDefinition {
        name: column(name),
        data_type,
        nullable: false,
        default: None,
        auto_increment: false,
        primary_key: false,
    }
}

/// A nullable column with no default.
pub fn nullable_column(name: &str, data_type: DataType) -> ColumnDefinition {
    ColumnDefinition {
        nullable: true,
        ..not_null_column(name, data_type)
    }
}

/// An `INT NOT NULL AUTO_INCREMENT PRIMARY KEY` column.
pub fn id_column(name: &str) -> ColumnDefinition {
    ColumnDefinition {
        auto_increment: true,
        primary_key: true,
        ..not_null_column(name, DataType::Int)
    }
}

/// Attach a default value to a column definition.
pub fn with_default(column: ColumnDefinition, default: Literal) -> ColumnDefinition {
    ColumnDefinition {
        default: Some(default),
        ..column
    }
}

// Expressions //

/// `column = ?`
pub fn column_equals(name: &str, value: Value) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(Expression::ColumnReference(column(name))),
        operator: BinaryOperator::Equals,
        right: Box::new(Expression::Value(value)),
    }
}

/// `column = function()`
pub fn column_equals_function(name: &str, function: Function) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(Expression::ColumnReference(column(name))),
        operator: BinaryOperator::Equals,
        right: Box::new(Expression::FunctionCall { function }),
    }
}

pub fn and(left: Expression, right: Expression) -> Expression {
    Expression::And {
        left: Box::new(left),
        right: Box::new(right),
    }
}

// SELECTs //

/// Build a simple select with a select list and the rest are empty.
pub fn simple_select(select_list: Vec<ColumnName>, from: TableReference) -> Select {
    Select {
        select_list: SelectList::SelectList(select_list),
        from,
        where_: empty_where(),
        order_by: empty_order_by(),
    }
}

/// `SELECT * FROM table`, with nothing else.
pub fn star_select(from: TableReference) -> Select {
    Select {
        select_list: SelectList::SelectStar,
        from,
        where_: empty_where(),
        order_by: empty_order_by(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::string::Param;

    #[test]
    fn renders_create_table() {
        let statement = Statement::CreateTable(CreateTable {
            if_not_exists: true,
            table: table("subjects"),
            columns: vec![
                id_column("id"),
                not_null_column("name", DataType::VarChar(255)),
            ],
            constraints: vec![TableConstraint::Unique {
                name: IndexName("uq_subjects_name".to_string()),
                columns: columns(&["name"]),
            }],
        });

        insta::assert_snapshot!(
            statement.to_sql().sql,
            @"CREATE TABLE IF NOT EXISTS `subjects` (`id` INT NOT NULL AUTO_INCREMENT PRIMARY KEY, `name` VARCHAR(255) NOT NULL, UNIQUE KEY `uq_subjects_name` (`name`))"
        );
    }

    #[test]
    fn renders_add_column_after() {
        let statement = Statement::AlterTable(AlterTable {
            table: table("grades"),
            action: AlterTableAction::AddColumn {
                column: with_default(
                    not_null_column("Category", DataType::VarChar(255)),
                    Literal::String("Uncategorized".to_string()),
                ),
                after: column("Subject"),
            },
        });

        insta::assert_snapshot!(
            statement.to_sql().sql,
            @"ALTER TABLE `grades` ADD COLUMN `Category` VARCHAR(255) NOT NULL DEFAULT 'Uncategorized' AFTER `Subject`"
        );
    }

    #[test]
    fn renders_add_index() {
        let statement = Statement::AlterTable(AlterTable {
            table: table("grades"),
            action: AlterTableAction::AddIndex {
                name: IndexName("idx_subject_category".to_string()),
                columns: columns(&["Subject", "Category"]),
            },
        });

        insta::assert_snapshot!(
            statement.to_sql().sql,
            @"ALTER TABLE `grades` ADD INDEX `idx_subject_category` (`Subject`, `Category`)"
        );
    }

    #[test]
    fn renders_filtered_select_with_params() {
        let select = Select {
            where_: Where(Some(and(
                column_equals_function("TABLE_SCHEMA", Function::Database),
                column_equals("TABLE_NAME", Value::String("grades".to_string())),
            ))),
            order_by: OrderBy {
                elements: columns(&["ORDINAL_POSITION"]),
            },
            ..simple_select(
                columns(&["COLUMN_NAME"]),
                qualified_table("information_schema", "COLUMNS"),
            )
        };

        let sql = Statement::Select(select).to_sql();

        insta::assert_snapshot!(
            sql.sql,
            @"SELECT `COLUMN_NAME` FROM `information_schema`.`COLUMNS` WHERE (`TABLE_SCHEMA` = DATABASE() AND `TABLE_NAME` = ?) ORDER BY `ORDINAL_POSITION`"
        );
        assert_eq!(sql.params, vec![Param::String("grades".to_string())]);
    }

    #[test]
    fn renders_insert() {
        let statement = Statement::Insert(Insert {
            table: table("subjects"),
            columns: columns(&["name"]),
            values: vec![Expression::Value(Value::String("Science".to_string()))],
        });

        let sql = statement.to_sql();

        insta::assert_snapshot!(sql.sql, @"INSERT INTO `subjects` (`name`) VALUES (?)");
        assert_eq!(sql.params, vec![Param::String("Science".to_string())]);
    }

    #[test]
    fn renders_star_select() {
        let select = Select {
            order_by: OrderBy {
                elements: columns(&["Subject", "CategoryName"]),
            },
            ..star_select(table("categories"))
        };

        insta::assert_snapshot!(
            Statement::Select(select).to_sql().sql,
            @"SELECT * FROM `categories` ORDER BY `Subject`, `CategoryName`"
        );
    }
}
