//! Logical column data types.

use crate::cast::cast_to;
use crate::dialect::SqlContext;
use crate::error::{SqlError, SqlResult};
use std::fmt;
use std::num::NonZeroU32;

/// A logical SQL data type.
///
/// Types are dialect-independent values; the dialect only matters when a
/// cast is rendered, and is taken from the caller's [`SqlContext`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    /// `INTEGER`
    Integer,
    /// `VARCHAR` with an optional length bound
    Varchar(Option<NonZeroU32>),
    /// Any other type, by name
    Custom {
        name: String,
        /// Whether values of this type are quoted when inlined
        is_text: bool,
    },
}

impl DataType {
    /// `INTEGER`.
    pub fn integer() -> Self {
        DataType::Integer
    }

    /// Unbounded `VARCHAR`.
    pub fn varchar() -> Self {
        DataType::Varchar(None)
    }

    /// `VARCHAR(length)`. Fails if `length` is zero.
    pub fn varchar_with_length(length: u32) -> SqlResult<Self> {
        NonZeroU32::new(length)
            .map(|n| DataType::Varchar(Some(n)))
            .ok_or_else(|| SqlError::validation("VARCHAR length must be a positive integer"))
    }

    /// A named type outside the built-in set, e.g. `DataType::custom("TEXT", true)`.
    pub fn custom(name: impl Into<String>, is_text: bool) -> Self {
        DataType::Custom {
            name: name.into(),
            is_text,
        }
    }

    /// Whether literal values of this type need quoting.
    pub fn is_text_type(&self) -> bool {
        match self {
            DataType::Integer => false,
            DataType::Varchar(_) => true,
            DataType::Custom { is_text, .. } => *is_text,
        }
    }

    /// Render a cast of `column` to this type.
    pub fn cast(&self, ctx: &SqlContext, column: &str) -> String {
        match self {
            DataType::Integer => cast_to::<&str>(ctx, column, "INTEGER", &[]),
            DataType::Varchar(None) => cast_to::<&str>(ctx, column, "VARCHAR", &[]),
            DataType::Varchar(Some(len)) => cast_to(ctx, column, "VARCHAR", &[len.to_string()]),
            DataType::Custom { name, .. } => cast_to::<&str>(ctx, column, name, &[]),
        }
    }

    /// Render the type as it appears in a column definition.
    pub fn declaration(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Integer => f.write_str("INTEGER"),
            DataType::Varchar(None) => f.write_str("VARCHAR"),
            DataType::Varchar(Some(len)) => write!(f, "VARCHAR({len})"),
            DataType::Custom { name, .. } => f.write_str(&name.to_uppercase()),
        }
    }
}
