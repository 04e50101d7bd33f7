//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::string::*;

impl Statement {
    /// Render the statement into a fresh [`SQL`].
    pub fn to_sql(&self) -> SQL {
        let mut sql = SQL::new();
        match self {
            Statement::CreateTable(create_table) => create_table.to_sql(&mut sql),
            Statement::AlterTable(alter_table) => alter_table.to_sql(&mut sql),
            Statement::Select(select) => select.to_sql(&mut sql),
            Statement::Insert(insert) => insert.to_sql(&mut sql),
        }
        sql
    }
}

impl CreateTable {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("CREATE TABLE ");
        if self.if_not_exists {
            sql.append_syntax("IF NOT EXISTS ");
        }
        self.table.to_sql(sql);
        sql.append_syntax(" (");

        let mut first = true;
        for column in &self.columns {
            if !first {
                sql.append_syntax(", ");
            }
            first = false;
            column.to_sql(sql);
        }
        for constraint in &self.constraints {
            if !first {
                sql.append_syntax(", ");
            }
            first = false;
            constraint.to_sql(sql);
        }

        sql.append_syntax(")");
    }
}

impl ColumnDefinition {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.name.to_sql(sql);
        sql.append_syntax(" ");
        self.data_type.to_sql(sql);
        if self.nullable {
            sql.append_syntax(" NULL");
        } else {
            sql.append_syntax(" NOT NULL");
        }
        if let Some(default) = &self.default {
            sql.append_syntax(" DEFAULT ");
            default.to_sql(sql);
        }
        if self.auto_increment {
            sql.append_syntax(" AUTO_INCREMENT");
        }
        if self.primary_key {
            sql.append_syntax(" PRIMARY KEY");
        }
    }
}

impl DataType {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            DataType::Int => sql.append_syntax("INT"),
            DataType::VarChar(length) => sql.append_syntax(&format!("VARCHAR({length})")),
            DataType::Double => sql.append_syntax("DOUBLE"),
            DataType::Timestamp => sql.append_syntax("TIMESTAMP"),
        }
    }
}

impl TableConstraint {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            TableConstraint::PrimaryKey { columns } => {
                sql.append_syntax("PRIMARY KEY");
                column_list_to_sql(columns, sql);
            }
            TableConstraint::Index { name, columns } => {
                sql.append_syntax("INDEX ");
                name.to_sql(sql);
                column_list_to_sql(columns, sql);
            }
            TableConstraint::Unique { name, columns } => {
                sql.append_syntax("UNIQUE KEY ");
                name.to_sql(sql);
                column_list_to_sql(columns, sql);
            }
        }
    }
}

impl AlterTable {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("ALTER TABLE ");
        self.table.to_sql(sql);
        sql.append_syntax(" ");
        match &self.action {
            AlterTableAction::AddColumn { column, after } => {
                sql.append_syntax("ADD COLUMN ");
                column.to_sql(sql);
                sql.append_syntax(" AFTER ");
                after.to_sql(sql);
            }
            AlterTableAction::AddIndex { name, columns } => {
                sql.append_syntax("ADD INDEX ");
                name.to_sql(sql);
                column_list_to_sql(columns, sql);
            }
        }
    }
}

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");
        self.select_list.to_sql(sql);
        sql.append_syntax(" FROM ");
        self.from.to_sql(sql);
        self.where_.to_sql(sql);
        self.order_by.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::SelectStar => sql.append_syntax("*"),
            SelectList::SelectList(columns) => {
                for (index, column) in columns.iter().enumerate() {
                    if index > 0 {
                        sql.append_syntax(", ");
                    }
                    column.to_sql(sql);
                }
            }
        }
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(expression) = self;
        if let Some(expression) = expression {
            sql.append_syntax(" WHERE ");
            expression.to_sql(sql);
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" ORDER BY ");
            for (index, column) in self.elements.iter().enumerate() {
                if index > 0 {
                    sql.append_syntax(", ");
                }
                column.to_sql(sql);
            }
        }
    }
}

impl Insert {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("INSERT INTO ");
        self.table.to_sql(sql);
        column_list_to_sql(&self.columns, sql);
        sql.append_syntax(" VALUES (");
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                sql.append_syntax(", ");
            }
            value.to_sql(sql);
        }
        sql.append_syntax(")");
    }
}

impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Expression::And { left, right } => {
                sql.append_syntax("(");
                left.to_sql(sql);
                sql.append_syntax(" AND ");
                right.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
            }
            Expression::FunctionCall { function } => function.to_sql(sql),
            Expression::ColumnReference(column) => column.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
        }
    }
}

impl BinaryOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            BinaryOperator::Equals => sql.append_syntax(" = "),
        }
    }
}

impl Function {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Function::Database => sql.append_syntax("DATABASE()"),
        }
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Value::String(string) => sql.append_param(Param::String(string.clone())),
        }
    }
}

impl Literal {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Literal::String(string) => sql.append_string_literal(string),
            Literal::Int(int) => sql.append_syntax(&int.to_string()),
            Literal::CurrentTimestamp => sql.append_syntax("CURRENT_TIMESTAMP"),
        }
    }
}

impl TableReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        if let Some(SchemaName(schema)) = &self.schema {
            sql.append_identifier(schema);
            sql.append_syntax(".");
        }
        let TableName(table) = &self.table;
        sql.append_identifier(table);
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let ColumnName(name) = self;
        sql.append_identifier(name);
    }
}

impl IndexName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let IndexName(name) = self;
        sql.append_identifier(name);
    }
}

fn column_list_to_sql(columns: &[ColumnName], sql: &mut SQL) {
    sql.append_syntax(" (");
    for (index, column) in columns.iter().enumerate() {
        if index > 0 {
            sql.append_syntax(", ");
        }
        column.to_sql(sql);
    }
    sql.append_syntax(")");
}
