//! CTE (WITH clause) composition.
//!
//! [`WithBuilder`] binds named SELECT statements and prefixes a main query
//! that must select from one of the bound names.
//!
//! # Example
//! ```
//! use sqlweave::{SelectBuilder, SqlContext, WithBuilder};
//!
//! let ctx = SqlContext::default();
//! let sql = WithBuilder::new()
//!     .add_table("one", SelectBuilder::new(ctx).select_all().from_table("table_one"))?
//!     .add_table("two", SelectBuilder::new(ctx).select_all().from_table("table_two"))?
//!     .set_query(SelectBuilder::new(ctx).select_all().from_table("one"))
//!     .build()?;
//!
//! assert_eq!(
//!     sql,
//!     "WITH one AS ( SELECT * FROM table_one ), two AS ( SELECT * FROM table_two ) SELECT * FROM one;"
//! );
//! # Ok::<(), sqlweave::CompositionError>(())
//! ```

use crate::builder::{SelectBuilder, SqlBuilder};
use crate::error::{CompositionError, StatementError};
use crate::log::{self, StatementKind};

/// A single CTE definition.
#[derive(Debug, Clone)]
struct CteDefinition {
    name: String,
    query: SelectBuilder,
}

/// Builder for WITH clause queries.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct WithBuilder {
    ctes: Vec<CteDefinition>,
    main_query: Option<SelectBuilder>,
}

impl WithBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `query` under `name`.
    ///
    /// Fails if `name` is empty or already bound.
    pub fn add_table(
        mut self,
        name: impl Into<String>,
        query: SelectBuilder,
    ) -> Result<Self, CompositionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CompositionError::EmptyName);
        }
        if self.contains(&name) {
            return Err(CompositionError::DuplicateName(name));
        }
        self.ctes.push(CteDefinition { name, query });
        Ok(self)
    }

    /// Set the main query, replacing any previous one.
    pub fn set_query(mut self, main_query: SelectBuilder) -> Self {
        self.main_query = Some(main_query);
        self
    }

    /// Bound CTE names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ctes.iter().map(|c| c.name.as_str())
    }

    fn contains(&self, name: &str) -> bool {
        self.ctes.iter().any(|c| c.name == name)
    }

    /// Check the composition and every member statement.
    pub fn validate(&self) -> Result<(), CompositionError> {
        let main = self.main()?;
        for cte in &self.ctes {
            cte.query.validate()?;
        }
        main.validate()?;
        Ok(())
    }

    fn main(&self) -> Result<&SelectBuilder, CompositionError> {
        if self.ctes.is_empty() {
            return Err(CompositionError::NoTables);
        }
        let main = self
            .main_query
            .as_ref()
            .ok_or(CompositionError::MissingMainQuery)?;
        match main.table_name() {
            None | Some("") => Err(StatementError::MissingTable.into()),
            Some(table) if self.contains(table) => Ok(main),
            Some(table) => Err(CompositionError::UnknownTable(table.to_string())),
        }
    }

    /// Render `WITH name AS ( ... ), ... <main query>;`.
    pub fn build(&self) -> Result<String, CompositionError> {
        let main = self.main()?;
        log::logged(&main.context(), StatementKind::With, self.build_internal(main))
    }

    fn build_internal(&self, main: &SelectBuilder) -> Result<String, CompositionError> {
        self.validate()?;
        let mut sql = String::from("WITH ");
        for (i, cte) in self.ctes.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&cte.name);
            sql.push_str(" AS ( ");
            sql.push_str(&cte.query.build_fragment(false)?);
            sql.push_str(" )");
        }
        sql.push(' ');
        sql.push_str(&main.build_fragment(true)?);
        Ok(sql)
    }
}

impl SqlBuilder for WithBuilder {
    type Error = CompositionError;

    fn validate(&self) -> Result<(), CompositionError> {
        WithBuilder::validate(self)
    }

    fn to_sql(&self) -> Result<String, CompositionError> {
        self.build()
    }
}
