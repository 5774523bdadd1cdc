//! # sqlweave
//!
//! A dialect-aware SQL text builder for Rust.
//!
//! ## Features
//!
//! - **Fluent builders**: SELECT, UNION / UNION ALL, WITH and CREATE TABLE
//! - **Dialect-aware casts**: `col::TYPE` for Postgres and Vertica, `CAST(col AS TYPE)` elsewhere
//! - **Composable**: statements render terminal (`;`) or as embeddable fragments
//! - **Deferred validation**: chained setters never fail; `build` reports what is missing
//! - **Literal quoting**: quoted values are sanitized before they are inlined
//!
//! sqlweave only produces SQL text. It never connects to a database, and
//! values are always inlined rather than bound as parameters.
//!
//! ## Example
//!
//! ```
//! use sqlweave::prelude::*;
//!
//! let ctx = SqlContext::new(Dialect::Postgres);
//!
//! let sql = SelectBuilder::new(ctx)
//!     .select("id")
//!     .select_and_cast("price", &DataType::varchar_with_length(20)?)
//!     .from_table("products")
//!     .filter("category", Operator::In, ["books", "games"], true)
//!     .or()
//!     .filter("price", Operator::Lt, 5, false)
//!     .build(true)?;
//!
//! assert_eq!(
//!     sql,
//!     "SELECT id, price::VARCHAR(20) FROM products WHERE category IN ('books','games') OR price < 5;"
//! );
//! # Ok::<(), sqlweave::SqlError>(())
//! ```
//!
//! ## Logging
//!
//! With the default `tracing` feature, each outermost `build` emits a DEBUG
//! event on target `sqlweave.sql`. See [`ContextConfig`] for the switches.

pub mod builder;
pub mod cast;
pub mod config;
pub mod connection;
pub mod cte;
pub mod ddl;
pub mod dialect;
pub mod error;
pub mod filter;
mod log;
pub mod sanitize;
pub mod types;

pub mod prelude;

pub use builder::{SelectBuilder, SqlBuilder, UnionBuilder, UnionKind};
pub use config::ContextConfig;
pub use connection::{ConnectionBuilder, DriverType};
pub use cte::WithBuilder;
pub use ddl::{CreateTableBuilder, TableColumn};
pub use dialect::{Dialect, SqlContext};
pub use error::{
    CompositionError, ConnectionError, DdlError, GroupError, SqlError, SqlResult,
    StatementError,
};
pub use filter::{Conjunction, FilterGroup, FilterValue, GroupPolicy, Operator};
pub use log::StatementKind;
pub use types::DataType;
