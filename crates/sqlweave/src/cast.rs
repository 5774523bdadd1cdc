//! Dialect-aware type casts.
//!
//! Postgres and Vertica use the `expr::TYPE` shorthand; every other dialect
//! gets the portable `CAST(expr AS TYPE)` form.

use crate::dialect::SqlContext;

/// Render a cast of `column` to `type_name` for the context's dialect.
///
/// `type_args` are joined with `", "` and wrapped in parentheses after the
/// type name, e.g. `VARCHAR(100)` or `NUMERIC(10, 2)`. An empty slice renders
/// the bare type.
///
/// ```
/// use sqlweave::{cast::cast_to, Dialect, SqlContext};
///
/// let pg = SqlContext::new(Dialect::Postgres);
/// assert_eq!(cast_to(&pg, "price", "NUMERIC", &["10", "2"]), "price::NUMERIC(10, 2)");
///
/// let mssql = SqlContext::new(Dialect::MsSql);
/// assert_eq!(cast_to(&mssql, "price", "NUMERIC", &["10", "2"]), "CAST(price AS NUMERIC(10, 2))");
/// ```
pub fn cast_to<S: AsRef<str>>(
    ctx: &SqlContext,
    column: &str,
    type_name: &str,
    type_args: &[S],
) -> String {
    let mut ty = String::with_capacity(type_name.len() + 8);
    ty.push_str(type_name);
    if !type_args.is_empty() {
        ty.push('(');
        for (i, arg) in type_args.iter().enumerate() {
            if i > 0 {
                ty.push_str(", ");
            }
            ty.push_str(arg.as_ref());
        }
        ty.push(')');
    }

    if ctx.dialect().is_postgres_family() {
        format!("{column}::{ty}")
    } else {
        format!("CAST({column} AS {ty})")
    }
}
