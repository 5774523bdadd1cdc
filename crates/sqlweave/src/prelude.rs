//! Convenient imports for typical `sqlweave` usage.
//!
//! ```
//! use sqlweave::prelude::*;
//! ```

pub use crate::{
    CreateTableBuilder, DataType, Dialect, FilterGroup, Operator, SelectBuilder, SqlBuilder,
    SqlContext, SqlError, SqlResult, TableColumn, UnionBuilder, WithBuilder,
};
