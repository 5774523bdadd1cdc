use super::column::TableColumn;
use crate::builder::SqlBuilder;
use crate::dialect::SqlContext;
use crate::error::DdlError;
use crate::log::{self, StatementKind};

/// `CREATE TABLE` builder.
///
/// ```
/// use sqlweave::{CreateTableBuilder, DataType, SqlContext, TableColumn};
///
/// let sql = CreateTableBuilder::new(SqlContext::default(), "users", true)?
///     .add_primary_key("id")?
///     .add_column(TableColumn::new("name", DataType::varchar_with_length(100)?, false)?)?
///     .build()?;
/// assert_eq!(
///     sql,
///     "CREATE TABLE IF NOT EXISTS users ( id SERIAL PRIMARY KEY, name VARCHAR(100) NOT NULL);"
/// );
/// # Ok::<(), sqlweave::SqlError>(())
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct CreateTableBuilder {
    ctx: SqlContext,
    name: String,
    if_not_exists: bool,
    primary_key: Option<String>,
    columns: Vec<TableColumn>,
}

impl CreateTableBuilder {
    /// Start a table definition. Fails if `name` is empty.
    pub fn new(
        ctx: SqlContext,
        name: impl Into<String>,
        if_not_exists: bool,
    ) -> Result<Self, DdlError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DdlError::EmptyTableName);
        }
        Ok(Self {
            ctx,
            name,
            if_not_exists,
            primary_key: None,
            columns: Vec::new(),
        })
    }

    /// Add a `SERIAL PRIMARY KEY` column, rendered first.
    ///
    /// A table has at most one key, and its name must not clash with a column.
    pub fn add_primary_key(mut self, name: impl Into<String>) -> Result<Self, DdlError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DdlError::EmptyColumnName);
        }
        if let Some(existing) = &self.primary_key {
            return Err(DdlError::DuplicatePrimaryKey(existing.clone()));
        }
        if self.has_column(&name) {
            return Err(DdlError::DuplicateColumn(name));
        }
        self.primary_key = Some(name);
        Ok(self)
    }

    /// Append a column. Names must be unique, including the key.
    pub fn add_column(mut self, column: TableColumn) -> Result<Self, DdlError> {
        if self.primary_key.as_deref() == Some(column.name()) || self.has_column(column.name()) {
            return Err(DdlError::DuplicateColumn(column.name().to_string()));
        }
        self.columns.push(column);
        Ok(self)
    }

    pub fn table_name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name() == name)
    }

    pub fn validate(&self) -> Result<(), DdlError> {
        if self.columns.is_empty() {
            return Err(DdlError::NoColumns);
        }
        Ok(())
    }

    /// Render the statement. Fails if no column was added.
    pub fn build(&self) -> Result<String, DdlError> {
        log::logged(&self.ctx, StatementKind::CreateTable, self.build_internal())
    }

    fn build_internal(&self) -> Result<String, DdlError> {
        self.validate()?;

        let mut sql = String::from("CREATE TABLE ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&self.name);
        sql.push_str(" ( ");

        let mut defs: Vec<String> = Vec::with_capacity(self.columns.len() + 1);
        if let Some(pk) = &self.primary_key {
            defs.push(format!("{pk} SERIAL PRIMARY KEY"));
        }
        defs.extend(self.columns.iter().map(ToString::to_string));
        sql.push_str(&defs.join(", "));
        sql.push_str(");");
        Ok(sql)
    }
}

impl SqlBuilder for CreateTableBuilder {
    type Error = DdlError;

    fn validate(&self) -> Result<(), DdlError> {
        CreateTableBuilder::validate(self)
    }

    fn to_sql(&self) -> Result<String, DdlError> {
        self.build()
    }
}
