use super::traits::SqlBuilder;
use crate::dialect::SqlContext;
use crate::error::StatementError;
use crate::filter::{
    FilterChain, FilterGroup, FilterValue, Operator, aliased_column, render_predicate,
};
use crate::log::{self, StatementKind};
use crate::types::DataType;

/// FROM table, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TableRef {
    name: String,
    alias: Option<String>,
}

/// SELECT statement builder.
///
/// Validation is deferred: missing pieces are reported by
/// [`build`](Self::build), never by the chained setters.
///
/// ```
/// use sqlweave::{Dialect, Operator, SelectBuilder, SqlContext};
///
/// let sql = SelectBuilder::new(SqlContext::new(Dialect::Postgres))
///     .select_columns(["id", "name"])
///     .from_table("users")
///     .filter("age", Operator::Gte, 18, false)
///     .limit(10)
///     .build(true)?;
/// assert_eq!(sql, "SELECT id, name FROM users WHERE age >= 18 LIMIT 10;");
/// # Ok::<(), sqlweave::StatementError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct SelectBuilder {
    ctx: SqlContext,
    /// FROM table
    source: Option<TableRef>,
    /// SELECT projections, in output order
    projections: Vec<String>,
    /// WHERE predicates
    filters: FilterChain,
    /// LIMIT (0 renders no clause)
    limit: Option<u64>,
    /// First deferred error (reported at build)
    build_error: Option<StatementError>,
}

impl SelectBuilder {
    /// Create a builder bound to `ctx`.
    pub fn new(ctx: SqlContext) -> Self {
        Self {
            ctx,
            source: None,
            projections: Vec::new(),
            filters: FilterChain::new(),
            limit: None,
            build_error: None,
        }
    }

    /// The context this statement renders with.
    pub fn context(&self) -> SqlContext {
        self.ctx
    }

    /// The FROM table name, without its alias.
    pub fn table_name(&self) -> Option<&str> {
        self.source.as_ref().map(|t| t.name.as_str())
    }

    pub fn filters(&self) -> &FilterChain {
        &self.filters
    }

    // ==================== FROM ====================

    /// Set the FROM table.
    pub fn from_table(mut self, name: impl Into<String>) -> Self {
        self.source = Some(TableRef {
            name: name.into(),
            alias: None,
        });
        self
    }

    /// Set the FROM table as `name AS alias`.
    pub fn from_table_with_alias(
        mut self,
        name: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        self.source = Some(TableRef {
            name: name.into(),
            alias: Some(alias.into()),
        });
        self
    }

    // ==================== Projections ====================

    /// Append `*`.
    pub fn select_all(self) -> Self {
        self.select("*")
    }

    /// Append one column expression.
    pub fn select(mut self, column: impl Into<String>) -> Self {
        self.projections.push(column.into());
        self
    }

    /// Append several column expressions, in order.
    pub fn select_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projections.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Append `column AS alias`.
    pub fn select_with_alias(self, column: &str, alias: &str) -> Self {
        self.select(format!("{column} AS {alias}"))
    }

    /// Append `column` cast to `data_type` in this statement's dialect.
    pub fn select_and_cast(self, column: &str, data_type: &DataType) -> Self {
        let cast = data_type.cast(&self.ctx, column);
        self.select(cast)
    }

    /// Append a cast column with an alias, e.g. `col1::INTEGER AS c1`.
    pub fn select_and_cast_with_alias(
        self,
        column: &str,
        alias: &str,
        data_type: &DataType,
    ) -> Self {
        let cast = data_type.cast(&self.ctx, column);
        self.select(format!("{cast} AS {alias}"))
    }

    // ==================== Conditions ====================

    /// Add a `column op value` predicate.
    ///
    /// With `quoted` set, values are sanitized and single-quoted. The
    /// predicate joins the previous one with AND unless [`or`](Self::or)
    /// was called in between.
    pub fn filter(
        mut self,
        column: &str,
        op: Operator,
        value: impl Into<FilterValue>,
        quoted: bool,
    ) -> Self {
        self.filters.push(render_predicate(column, op, &value.into(), quoted));
        self
    }

    /// Add a predicate on `alias.column`.
    pub fn filter_with_alias(
        self,
        column: &str,
        alias: &str,
        op: Operator,
        value: impl Into<FilterValue>,
        quoted: bool,
    ) -> Self {
        self.filter(&aliased_column(column, alias), op, value, quoted)
    }

    /// Add a parenthesized group as a single predicate.
    ///
    /// An empty group adds nothing and makes [`build`](Self::build) fail.
    pub fn filter_group(mut self, group: FilterGroup) -> Self {
        match group.render() {
            Ok(predicate) => self.filters.push(predicate),
            Err(err) => {
                if self.build_error.is_none() {
                    self.build_error = Some(err.into());
                }
            }
        }
        self
    }

    /// Link the last predicate to the next one with AND.
    pub fn and(mut self) -> Self {
        self.filters.and();
        self
    }

    /// Link the last predicate to the next one with OR.
    pub fn or(mut self) -> Self {
        self.filters.or();
        self
    }

    /// Set LIMIT. Zero renders no LIMIT clause.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    // ==================== SQL build ====================

    /// Check the statement can be rendered.
    pub fn validate(&self) -> Result<(), StatementError> {
        match &self.source {
            Some(table) if !table.name.is_empty() => {}
            _ => return Err(StatementError::MissingTable),
        }
        if self.projections.is_empty() {
            return Err(StatementError::MissingColumns);
        }
        if let Some(err) = &self.build_error {
            return Err(err.clone());
        }
        Ok(())
    }

    /// Render the statement.
    ///
    /// A terminal statement ends with `;`. Pass `false` to embed the result
    /// in a larger statement.
    pub fn build(&self, terminal: bool) -> Result<String, StatementError> {
        log::logged(&self.ctx, StatementKind::Select, self.build_fragment(terminal))
    }

    /// Validate and render without logging; used by composing builders.
    pub(crate) fn build_fragment(&self, terminal: bool) -> Result<String, StatementError> {
        self.validate()?;
        Ok(self.build_sql_internal(terminal))
    }

    fn build_sql_internal(&self, terminal: bool) -> String {
        let mut sql = String::with_capacity(64);
        sql.push_str("SELECT ");
        sql.push_str(&self.projections.join(", "));

        if let Some(table) = &self.source {
            sql.push_str(" FROM ");
            sql.push_str(&table.name);
            if let Some(alias) = &table.alias {
                sql.push_str(" AS ");
                sql.push_str(alias);
            }
        }

        if !self.filters.is_empty() {
            sql.push_str(" WHERE ");
            self.filters.write_clause(&mut sql);
        }

        if let Some(limit) = self.limit.filter(|&n| n > 0) {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        if terminal {
            sql.push(';');
        }
        sql
    }
}

impl SqlBuilder for SelectBuilder {
    type Error = StatementError;

    fn validate(&self) -> Result<(), StatementError> {
        SelectBuilder::validate(self)
    }

    fn to_sql(&self) -> Result<String, StatementError> {
        self.build(true)
    }
}
