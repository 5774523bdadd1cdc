//! Rendered-SQL debug events.
//!
//! With the `tracing` feature enabled, every outermost `build` emits one
//! DEBUG event on target `sqlweave.sql`. Nested renders (UNION members, CTE
//! bodies) are not logged on their own.

use crate::dialect::SqlContext;
use std::fmt;

/// The kind of statement a builder renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// SELECT statement
    Select,
    /// UNION / UNION ALL chain
    Union,
    /// WITH clause plus main query
    With,
    /// CREATE TABLE statement
    CreateTable,
    /// Driver connection string
    Connection,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Union => "union",
            StatementKind::With => "with",
            StatementKind::CreateTable => "create_table",
            StatementKind::Connection => "connection",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Truncate a string to at most `max_bytes`, respecting UTF-8 boundaries.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn display_sql(ctx: &SqlContext, sql: &str) -> String {
    match ctx.max_sql_length() {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn emit_sql(ctx: &SqlContext, kind: StatementKind, sql: &str) {
    if !ctx.log_sql() {
        return;
    }
    let sql = display_sql(ctx, sql);
    tracing::debug!(
        target: "sqlweave.sql",
        statement = kind.as_str(),
        dialect = ctx.dialect().as_str(),
        sql = %sql,
    );
}

#[cfg(feature = "tracing")]
pub(crate) fn emit_failure(ctx: &SqlContext, kind: StatementKind, error: &dyn std::error::Error) {
    if !ctx.log_sql() {
        return;
    }
    tracing::debug!(
        target: "sqlweave.sql",
        statement = kind.as_str(),
        dialect = ctx.dialect().as_str(),
        error = %error,
        "build rejected",
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn emit_sql(_ctx: &SqlContext, _kind: StatementKind, _sql: &str) {}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn emit_failure(
    _ctx: &SqlContext,
    _kind: StatementKind,
    _error: &dyn std::error::Error,
) {
}

/// Run `result` through the SQL logger and hand it back unchanged.
pub(crate) fn logged<E: std::error::Error + 'static>(
    ctx: &SqlContext,
    kind: StatementKind,
    result: Result<String, E>,
) -> Result<String, E> {
    match &result {
        Ok(sql) => emit_sql(ctx, kind, sql),
        Err(err) => emit_failure(ctx, kind, err),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContextConfig;

    #[test]
    fn truncate_on_char_boundary() {
        assert_eq!(truncate_sql_bytes("SELECT 1", 100), "SELECT 1");
        assert_eq!(truncate_sql_bytes("SELECT 1", 6), "SELECT");
        // 'é' is two bytes; cutting inside it backs off to the boundary
        assert_eq!(truncate_sql_bytes("café", 4), "caf");
        assert_eq!(truncate_sql_bytes("", 0), "");
    }

    #[test]
    fn display_sql_honours_context_limit() {
        let ctx = SqlContext::from_config(&ContextConfig::new().max_sql_length(6));
        assert_eq!(display_sql(&ctx, "SELECT * FROM t"), "SELECT...");
        assert_eq!(display_sql(&ctx, "SELECT"), "SELECT");

        let ctx = SqlContext::from_config(&ContextConfig::new().no_truncate());
        assert_eq!(display_sql(&ctx, "SELECT * FROM t"), "SELECT * FROM t");
    }

    #[test]
    fn logged_passes_result_through() {
        let ctx = SqlContext::default();
        let ok: Result<String, crate::StatementError> = Ok("SELECT 1;".into());
        assert_eq!(logged(&ctx, StatementKind::Select, ok), Ok("SELECT 1;".into()));
        let err: Result<String, _> = Err(crate::StatementError::MissingTable);
        assert_eq!(
            logged(&ctx, StatementKind::Select, err),
            Err(crate::StatementError::MissingTable)
        );
    }

    #[test]
    fn statement_kind_names() {
        assert_eq!(StatementKind::CreateTable.to_string(), "create_table");
        assert_eq!(StatementKind::With.as_str(), "with");
    }
}
