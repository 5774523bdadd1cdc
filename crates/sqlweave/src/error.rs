//! Error types for sqlweave

use thiserror::Error;

/// Result type alias for sqlweave operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while rendering a single SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    /// No FROM table was set
    #[error("Table name can not be empty")]
    MissingTable,

    /// No projection was added
    #[error("Column list can not be empty")]
    MissingColumns,

    /// A filter group attached to the statement was invalid
    #[error("Invalid filter group: {0}")]
    Group(#[from] GroupError),
}

/// Errors raised by [`FilterGroup`](crate::filter::FilterGroup).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The group has no predicates and would render as `()`
    #[error("Filter group has no conditions")]
    Empty,
}

/// Errors raised while composing statements (WITH clauses).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// CTE registered with an empty name
    #[error("CTE name can not be empty")]
    EmptyName,

    /// CTE name registered twice
    #[error("CTE with name '{0}' already exists")]
    DuplicateName(String),

    /// `build()` called before any CTE was registered
    #[error("CTE does not have any tables")]
    NoTables,

    /// `build()` called before the main query was set
    #[error("CTE is missing a main query")]
    MissingMainQuery,

    /// The main query selects from a name that is not bound by the WITH clause
    #[error("Main query selects from '{0}', which is not a table in the CTE")]
    UnknownTable(String),

    /// A member statement failed to render
    #[error(transparent)]
    Statement(#[from] StatementError),
}

/// Errors raised by the CREATE TABLE renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DdlError {
    #[error("Table name can not be empty")]
    EmptyTableName,

    #[error("Column name can not be empty")]
    EmptyColumnName,

    #[error("Primary key already exists: {0}")]
    DuplicatePrimaryKey(String),

    #[error("Column name '{0}' already exists")]
    DuplicateColumn(String),

    #[error("Can not create a table with no columns")]
    NoColumns,
}

/// Errors raised by the connection-string builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    #[error("Hostname can not be empty")]
    EmptyHost,

    #[error("Database name can not be empty")]
    EmptyDatabase,

    /// The dialect/driver combination has no connection-string format
    #[error("Unsupported connection target: {0}")]
    Unsupported(String),

    /// SQLite connections address a file, so a database name is required
    #[error("SQLite connection strings require a database name")]
    MissingDatabase,
}

/// Top-level error type, wrapping every builder's error family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    #[error("Statement error: {0}")]
    Statement(#[from] StatementError),

    #[error("Filter group error: {0}")]
    Group(#[from] GroupError),

    #[error("Composition error: {0}")]
    Composition(#[from] CompositionError),

    #[error("DDL error: {0}")]
    Ddl(#[from] DdlError),

    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Configuration loading/parsing error
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid input value
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SqlError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this error came from a SELECT statement build
    pub fn is_statement(&self) -> bool {
        matches!(self, Self::Statement(_))
    }

    /// Check if this error came from WITH/UNION composition
    pub fn is_composition(&self) -> bool {
        matches!(self, Self::Composition(_))
    }
}

impl From<toml::de::Error> for SqlError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
