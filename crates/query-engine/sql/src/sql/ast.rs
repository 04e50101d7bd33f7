//! Type definitions of a SQL AST representation.

/// A statement we know how to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    AlterTable(AlterTable),
    Select(Select),
    Insert(Insert),
}

/// A CREATE TABLE statement
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub if_not_exists: bool,
    pub table: TableReference,
    pub columns: Vec<ColumnDefinition>,
    pub constraints: Vec<TableConstraint>,
}

/// A column inside CREATE TABLE or ALTER TABLE ... ADD COLUMN
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: ColumnName,
    pub data_type: DataType,
    pub nullable: bool,
    pub default: Option<Literal>,
    pub auto_increment: bool,
    pub primary_key: bool,
}

/// The column types the gradebook schema uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    VarChar(u32),
    Double,
    Timestamp,
}

/// A table-level constraint or index inside CREATE TABLE
#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraint {
    PrimaryKey {
        columns: Vec<ColumnName>,
    },
    Index {
        name: IndexName,
        columns: Vec<ColumnName>,
    },
    Unique {
        name: IndexName,
        columns: Vec<ColumnName>,
    },
}

/// An ALTER TABLE statement
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable {
    pub table: TableReference,
    pub action: AlterTableAction,
}

/// What an ALTER TABLE does
#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableAction {
    AddColumn {
        column: ColumnDefinition,
        /// The new column goes right after this one.
        after: ColumnName,
    },
    AddIndex {
        name: IndexName,
        columns: Vec<ColumnName>,
    },
}

/// A SELECT statement over a single table
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: TableReference,
    pub where_: Where,
    pub order_by: OrderBy,
}

/// A select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectList {
    SelectList(Vec<ColumnName>),
    SelectStar,
}

/// A WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Option<Expression>);

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<ColumnName>,
}

/// An INSERT statement
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: TableReference,
    pub columns: Vec<ColumnName>,
    pub values: Vec<Expression>,
}

/// An expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// AND clause
    And {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// Binary operator expression
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// A function call
    FunctionCall { function: Function },
    /// A column reference
    ColumnReference(ColumnName),
    /// A value, sent as a bind parameter
    Value(Value),
}

/// Binary comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
}

/// Argument-less functions we call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// The name of the current database.
    Database,
}

/// A value passed as a bind parameter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
}

/// A literal written into DDL, where bind parameters are not allowed
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Int(i64),
    CurrentTimestamp,
}

/// A reference to a table, optionally qualified by its schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReference {
    pub schema: Option<SchemaName>,
    pub table: TableName,
}

/// A database schema name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaName(pub String);

/// A table name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(pub String);

/// A column name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ColumnName(pub String);

/// An index name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexName(pub String);
