//! WHERE clause building blocks.
//!
//! - [`Operator`] and [`FilterValue`] render a single `column op value` predicate.
//! - [`FilterChain`] links predicates with AND/OR conjunctions.
//! - [`FilterGroup`] collects predicates under one policy and renders them as
//!   a single parenthesized predicate.
//!
//! # Example
//! ```
//! use sqlweave::{FilterGroup, Operator, SelectBuilder, SqlContext};
//!
//! let sql = SelectBuilder::new(SqlContext::default())
//!     .select_all()
//!     .from_table("users")
//!     .filter("status", Operator::Eq, "active", true)
//!     .filter_group(
//!         FilterGroup::new()
//!             .filter("role", Operator::Eq, "admin", true)
//!             .filter("age", Operator::Gte, 21, false)
//!             .any_of(),
//!     )
//!     .build(true)?;
//!
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM users WHERE status = 'active' AND (role = 'admin' OR age >= 21);"
//! );
//! # Ok::<(), sqlweave::StatementError>(())
//! ```

mod chain;
mod group;

pub use chain::{Conjunction, FilterChain, FilterExpression};
pub use group::{FilterGroup, GroupPolicy};

use crate::sanitize::quote_literal;
use std::fmt;

/// Comparison operator of a filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `LIKE` pattern match
    Like,
    /// Case-insensitive LIKE
    Ilike,
    /// `IN (...)`; an empty list renders `1=0`
    In,
    /// `NOT IN (...)`; an empty list renders `1=1`
    NotIn,
}

impl Operator {
    pub fn as_sql(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Like => "LIKE",
            Operator::Ilike => "ILIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
        }
    }

    /// IN and NOT IN take a parenthesized list.
    pub fn is_list(self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Right-hand side of a predicate: one value or an ordered list.
///
/// Values are kept in their display form and inlined into the SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Scalar(String),
    List(Vec<String>),
}

impl FilterValue {
    /// Build a list value from any displayable items.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        FilterValue::List(items.into_iter().map(|v| v.to_string()).collect())
    }

    fn write_item(out: &mut String, item: &str, quoted: bool) {
        if quoted {
            out.push_str(&quote_literal(item));
        } else {
            out.push_str(item);
        }
    }

    fn write_parenthesized(&self, out: &mut String, quoted: bool) {
        out.push('(');
        match self {
            FilterValue::Scalar(v) => Self::write_item(out, v, quoted),
            FilterValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    Self::write_item(out, item, quoted);
                }
            }
        }
        out.push(')');
    }
}

macro_rules! impl_scalar_filter_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FilterValue {
                fn from(v: $ty) -> Self {
                    FilterValue::Scalar(v.to_string())
                }
            }
        )*
    };
}

impl_scalar_filter_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, &str,
    String, &String,
);

impl<T: fmt::Display> From<Vec<T>> for FilterValue {
    fn from(items: Vec<T>) -> Self {
        FilterValue::list(items)
    }
}

impl<T: fmt::Display> From<&[T]> for FilterValue {
    fn from(items: &[T]) -> Self {
        FilterValue::list(items)
    }
}

impl<T: fmt::Display, const N: usize> From<[T; N]> for FilterValue {
    fn from(items: [T; N]) -> Self {
        FilterValue::list(items)
    }
}

/// Render `column op value`.
///
/// With `quoted` set, every value (each list element independently) is
/// sanitized and single-quoted. An empty IN list renders as `1=0` and an
/// empty NOT IN list as `1=1`.
pub fn render_predicate(column: &str, op: Operator, value: &FilterValue, quoted: bool) -> String {
    if let FilterValue::List(items) = value {
        if items.is_empty() {
            return match op {
                Operator::NotIn => "1=1".to_string(),
                _ => "1=0".to_string(),
            };
        }
    }

    let mut out = String::with_capacity(column.len() + 16);
    out.push_str(column);
    out.push(' ');
    out.push_str(op.as_sql());
    out.push(' ');

    match value {
        FilterValue::Scalar(v) if !op.is_list() => FilterValue::write_item(&mut out, v, quoted),
        _ => value.write_parenthesized(&mut out, quoted),
    }
    out
}

/// `alias.column`
pub(crate) fn aliased_column(column: &str, alias: &str) -> String {
    format!("{alias}.{column}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_operators() {
        let cases = [
            (Operator::Eq, "col = 10"),
            (Operator::Ne, "col != 10"),
            (Operator::Gt, "col > 10"),
            (Operator::Gte, "col >= 10"),
            (Operator::Lt, "col < 10"),
            (Operator::Lte, "col <= 10"),
        ];
        for (op, expected) in cases {
            assert_eq!(render_predicate("col", op, &10.into(), false), expected);
        }
    }

    #[test]
    fn quoted_scalar_is_sanitized() {
        assert_eq!(
            render_predicate("col1", Operator::Eq, &"quot'ed stri''ng".into(), true),
            "col1 = 'quot''ed stri''ng'"
        );
        assert_eq!(
            render_predicate("col8", Operator::Ilike, &"text%".into(), true),
            "col8 ILIKE 'text%'"
        );
    }

    #[test]
    fn in_single_value() {
        assert_eq!(render_predicate("col1", Operator::In, &10.into(), false), "col1 IN (10)");
        assert_eq!(render_predicate("col1", Operator::In, &10.into(), true), "col1 IN ('10')");
        assert_eq!(
            render_predicate("col1", Operator::NotIn, &10.into(), true),
            "col1 NOT IN ('10')"
        );
    }

    #[test]
    fn in_list_has_no_spaces() {
        assert_eq!(
            render_predicate("col1", Operator::In, &vec![10, 20, 30].into(), false),
            "col1 IN (10,20,30)"
        );
        assert_eq!(
            render_predicate("col1", Operator::In, &[10, 20, 30].into(), true),
            "col1 IN ('10','20','30')"
        );
        assert_eq!(
            render_predicate("col1", Operator::NotIn, &vec!["a'b", "c"].into(), true),
            "col1 NOT IN ('a''b','c')"
        );
    }

    #[test]
    fn empty_lists() {
        let empty = FilterValue::List(Vec::new());
        assert_eq!(render_predicate("col1", Operator::In, &empty, false), "1=0");
        assert_eq!(render_predicate("col1", Operator::NotIn, &empty, true), "1=1");
    }

    #[test]
    fn bool_and_float_values() {
        assert_eq!(render_predicate("col3", Operator::Ne, &false.into(), false), "col3 != false");
        assert_eq!(render_predicate("price", Operator::Lt, &9.5.into(), false), "price < 9.5");
    }
}
