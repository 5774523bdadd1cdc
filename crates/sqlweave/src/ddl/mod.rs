//! Table DDL rendering.

mod column;
mod create_table;

pub use column::TableColumn;
pub use create_table::CreateTableBuilder;
